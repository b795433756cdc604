pub mod RemoteSource;
