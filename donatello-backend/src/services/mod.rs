pub mod converter;
pub mod minter;
pub mod providers;
pub mod storage;

pub use converter::{decode_png, PlaceholderConverter, SvgConverter};
pub use minter::{MintReceipt, NftMetadata, NftMinter, PlaceholderMinter};
pub use storage::{ContentStorage, PlaceholderStorage};
