pub mod common;
pub mod dual_pivot;
pub mod fat_pivot;
pub mod hoare;
pub mod hybrid;
pub mod lomuto;
pub mod three_way;
