//! donatello-backend: chat-and-conversion router for the Donatello AI
//! art-to-NFT assistant.
//!
//! External collaborators (vector conversion, decentralized storage,
//! blockchain minting, generative AI) are reached only through the
//! capability traits in [`services`]; placeholder clients stand in for the
//! unbuilt integrations.

pub mod config;
pub mod dtos;
pub mod handlers;
pub mod services;
pub mod startup;
