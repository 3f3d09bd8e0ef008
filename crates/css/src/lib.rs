//! Attrstyle CSS
//!
//! Tokenizer and serializer for inline `style` declaration text.

mod declaration;
mod serialize;

pub use declaration::{
    is_css_whitespace, next_declaration, parse_declarations, trim_css_whitespace,
    DeclarationPair, Declarations,
};
pub use serialize::{serialize_declarations, write_declarations};
