mod in_order;
mod owned_iter;
mod post_order;
mod pre_order;

pub use in_order::*;
pub use owned_iter::*;
pub use post_order::*;
pub use pre_order::*;
