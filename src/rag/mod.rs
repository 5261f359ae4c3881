//! Retrieval-augmented answering over the book's passage index.
//!
//! The pipeline is strictly sequential per query: embed the question, search
//! the vector index, format a bounded context block, compose the navigator
//! prompt, call the chat model.

pub mod context;
pub mod engine;
pub mod pinecone;
pub mod prompt;
pub mod retriever;
pub mod store;
