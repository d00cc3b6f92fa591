mod token;

pub use token::TokenProvider;
