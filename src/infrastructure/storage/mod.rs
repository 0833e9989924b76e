mod local_library_store;

pub use local_library_store::LocalLibraryStore;
