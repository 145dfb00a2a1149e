//! ELF note entries.

/// One note entry (`SHT_NOTE` content): an owner name, a type word and a description
/// payload.
///
/// A note may declare the name of the section it belongs to (e.g.
/// `.note.gnu.build-id`); when the section does not exist yet, the rebuild pipeline
/// must reserve that name in the section-name table so the section can be synthesized.
#[derive(Debug, Clone)]
pub struct Note {
    name: String,
    note_type: u32,
    description: Vec<u8>,
    section_name: Option<String>,
}

impl Note {
    /// Creates a note that does not belong to a named section.
    pub fn new(name: impl Into<String>, note_type: u32, description: Vec<u8>) -> Self {
        Note {
            name: name.into(),
            note_type,
            description,
            section_name: None,
        }
    }

    /// Declares the section this note belongs to.
    #[must_use]
    pub fn with_section_name(mut self, section_name: impl Into<String>) -> Self {
        self.section_name = Some(section_name.into());
        self
    }

    /// The owner name, e.g. `GNU`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The owner-defined type word.
    pub fn note_type(&self) -> u32 {
        self.note_type
    }

    /// The description payload.
    pub fn description(&self) -> &[u8] {
        &self.description
    }

    /// The name of the section this note belongs to, if declared.
    pub fn section_name(&self) -> Option<&str> {
        self.section_name.as_deref()
    }
}
