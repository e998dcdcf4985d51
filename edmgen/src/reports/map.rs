//! Map command report data structures.

use super::output::{Output, Report};

/// One rendered class.
#[derive(Debug)]
pub struct ClassSection {
    /// Heading, e.g. "Color (enum) as EnumSet<Color>".
    pub heading: String,
    pub imports: Vec<String>,
    /// Member lines, e.g. "msgraphclass: Integer [simple] (was class)".
    pub members: Vec<String>,
}

/// Report data from mapping a model.
#[derive(Debug)]
pub struct MapReport {
    pub language: String,
    pub classes: Vec<ClassSection>,
    /// Rendered diagnostics.
    pub notes: Vec<String>,
}

impl Report for MapReport {
    fn render(&self, out: &mut dyn Output) {
        out.title(&format!("Mapping ({})", self.language));

        for class in &self.classes {
            out.newline();
            out.section(&class.heading);
            for import in &class.imports {
                out.list_item(import);
            }
            for member in &class.members {
                out.list_item(member);
            }
        }

        if !self.notes.is_empty() {
            out.newline();
            for note in &self.notes {
                out.preformatted(note);
            }
        }
    }
}
