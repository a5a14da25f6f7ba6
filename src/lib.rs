pub mod cur;
pub mod pinv;
pub mod probability;
pub mod sampling;
pub mod svd;
mod utils;

pub use cur::cur_decomposition;
pub use cur::Cur;
pub use cur::CurBuilder;
pub use cur::CurDecomposition;
pub use utils::Direction;
