use super::Renderer;
use crate::model::Step;

/// Render `steps` as a nested `<ul>` starting at `level`, text verbatim
pub fn render_steps(steps: &[Step], level: usize) -> String {
    Renderer::default().steps(steps, level)
}

impl Renderer {
    /// Each branch nests its substeps one level deeper, tagged `step-level-N`
    pub fn steps(&self, steps: &[Step], level: usize) -> String {
        let mut html = String::new();
        self.write_steps(&mut html, steps, level);
        html
    }

    fn write_steps(&self, html: &mut String, steps: &[Step], level: usize) {
        html.push_str(&format!("<ul class=\"step-level-{}\">", level));

        for step in steps {
            match step {
                Step::Leaf(text) => {
                    html.push_str("<li>");
                    html.push_str(&self.text(text));
                    html.push_str("</li>");
                }
                Step::Branch { text, substeps } => {
                    html.push_str("<li>");
                    html.push_str(&self.text(text));
                    self.write_steps(html, substeps, level + 1);
                    html.push_str("</li>");
                }
            }
        }

        html.push_str("</ul>");
    }
}
