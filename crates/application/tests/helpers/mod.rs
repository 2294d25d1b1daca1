#![allow(dead_code)]

mod mock_host_table;

pub use mock_host_table::{table_of, MockHostTableReader};
