pub mod product;

pub use product::ProductInfo;
