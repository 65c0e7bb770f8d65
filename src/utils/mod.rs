pub mod download;
pub mod fs;
pub mod output;
pub mod temp;
