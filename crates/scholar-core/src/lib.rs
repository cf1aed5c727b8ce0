//! Core of ScholarFrame: the research state machine, the section parser that
//! turns generated text into displayable sections, and the port through which
//! a framework is generated.

pub mod parser;
pub mod ports;
pub mod state;

pub use parser::{classify_line, parse_sections, ContentLine, FrameworkSection, SectionKind, SECTION_MARKER};
pub use ports::{FailureKind, FrameworkGenerator, GenerationError, GENERATION_FAILED_MESSAGE};
pub use state::{IgnoreReason, ResearchState, Transition, UNEXPECTED_ERROR_MESSAGE};
