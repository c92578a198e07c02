pub mod attachment;
pub mod category;
pub mod order;
pub mod product;
pub mod tag;
pub mod user;
