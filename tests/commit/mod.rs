mod commit_records_and_snapshots;
mod commit_with_nothing_staged;
mod commit_survives_stray_files;
