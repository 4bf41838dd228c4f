mod walk;

pub use walk::find_files_with_suffix;
