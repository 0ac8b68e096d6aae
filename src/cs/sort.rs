pub mod kth_largest;
pub mod partition;
pub mod quickselect;
pub mod rank;
pub mod swap;

pub use kth_largest::{
    kth_largest, kth_largest_in, kth_largest_with, kth_smallest, kth_smallest_with,
};
pub use partition::{partition, partition_range};
pub use quickselect::{select_nth, PivotPolicy};
pub use rank::IntoRank;
pub use swap::swap;
