pub mod cs;
pub mod error;

pub use cs::sort;
pub use cs::sort::{
    kth_largest, kth_largest_in, kth_largest_with, kth_smallest, kth_smallest_with, partition,
    partition_range, select_nth, swap, IntoRank, PivotPolicy,
};
pub use error::{Error, Result};
