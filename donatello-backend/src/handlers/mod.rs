pub mod chat;
pub mod convert;
pub mod health;
pub mod mint;

pub use chat::{assistant_chat, chat};
pub use convert::convert_to_svg;
pub use health::health_check;
pub use mint::mint_nft;
