mod form_401_summary;

pub use form_401_summary::Form401Summary;
