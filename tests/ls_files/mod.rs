mod ls_files_lists_paths_below_the_cwd;
