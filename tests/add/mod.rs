mod add_files_from_nested_directories;
mod add_reports_unmatched_pathspecs;
mod add_without_arguments_hints;
mod add_follows_symlinked_files;
