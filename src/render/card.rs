use super::{panel_open_tag, toggle_button, PanelKind, Renderer};
use crate::model::Recipe;

/// Render one recipe card with verbatim text
pub fn render_card(recipe: &Recipe, favorite: bool) -> String {
    Renderer::default().card(recipe, favorite)
}

impl Renderer {
    /// Card markup. Controls carry `data-id` (plus `data-toggle` or
    /// `data-favorite`) and panels are addressable as `<kind>-<id>`.
    pub fn card(&self, recipe: &Recipe, favorite: bool) -> String {
        let id = recipe.id;
        let mut html = String::new();

        html.push_str(&format!("<div class=\"recipe-card\" data-id=\"{}\">", id));

        html.push_str("<div class=\"recipe-header\">");
        html.push_str(&format!("<h3>{}</h3>", self.text(&recipe.title)));
        html.push_str(&format!(
            "<button class=\"favorite-btn{}\" data-favorite=\"{}\" data-id=\"{}\" \
             aria-pressed=\"{}\">{}</button>",
            if favorite { " active" } else { "" },
            id,
            id,
            favorite,
            if favorite { "\u{2605}" } else { "\u{2606}" },
        ));
        html.push_str("</div>");

        html.push_str("<div class=\"recipe-meta\">");
        html.push_str(&format!("<span>\u{23f1} {} min</span>", recipe.time));
        html.push_str(&format!(
            "<span class=\"difficulty {0}\">{0}</span>",
            recipe.difficulty
        ));
        if let Some(category) = &recipe.category {
            html.push_str(&format!(
                "<span class=\"category\">{}</span>",
                self.text(category)
            ));
        }
        html.push_str("</div>");

        html.push_str(&format!("<p>{}</p>", self.text(&recipe.description)));

        for kind in [PanelKind::Ingredients, PanelKind::Steps] {
            html.push_str(&toggle_button(kind, id, false));
        }

        html.push_str(&panel_open_tag(PanelKind::Ingredients, id, false));
        html.push_str("<ul>");
        for ingredient in &recipe.ingredients {
            html.push_str(&format!("<li>{}</li>", self.text(ingredient)));
        }
        html.push_str("</ul></div>");

        html.push_str(&panel_open_tag(PanelKind::Steps, id, false));
        html.push_str(&self.steps(&recipe.steps, 0));
        html.push_str("</div>");

        html.push_str("</div>");
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Difficulty, Step};

    fn greek_salad() -> Recipe {
        Recipe {
            id: 3,
            title: "Greek Salad".to_string(),
            time: 15,
            difficulty: Difficulty::Easy,
            description: "Fresh vegetable salad.".to_string(),
            ingredients: vec!["Tomato".to_string(), "Feta".to_string()],
            steps: vec![Step::leaf("Chop vegetables"), Step::leaf("Serve")],
            category: None,
        }
    }

    #[test]
    fn test_card_contents() {
        let html = render_card(&greek_salad(), false);

        assert!(html.starts_with("<div class=\"recipe-card\" data-id=\"3\">"));
        assert!(html.contains("<h3>Greek Salad</h3>"));
        assert!(html.contains("15 min"));
        assert!(html.contains("<span class=\"difficulty easy\">easy</span>"));
        assert!(html.contains("<p>Fresh vegetable salad.</p>"));
        assert!(html.contains("id=\"ingredients-3\"><ul><li>Tomato</li><li>Feta</li></ul>"));
        assert!(html.contains("id=\"steps-3\"><ul class=\"step-level-0\">"));
        assert!(!html.contains("class=\"category\""));
    }

    #[test]
    fn test_toggle_controls() {
        let html = render_card(&greek_salad(), false);
        assert!(html.contains(
            "<button class=\"toggle-btn\" data-toggle=\"ingredients\" data-id=\"3\">\
             Show ingredients</button>"
        ));
        assert!(html.contains(
            "<button class=\"toggle-btn\" data-toggle=\"steps\" data-id=\"3\">Show steps</button>"
        ));
    }

    #[test]
    fn test_favorite_status() {
        let plain = render_card(&greek_salad(), false);
        let starred = render_card(&greek_salad(), true);

        assert!(plain.contains("class=\"favorite-btn\" data-favorite=\"3\""));
        assert!(plain.contains("aria-pressed=\"false\""));
        assert!(starred.contains("class=\"favorite-btn active\" data-favorite=\"3\""));
        assert!(starred.contains("aria-pressed=\"true\""));
    }

    #[test]
    fn test_category_rendered_when_present() {
        let mut recipe = greek_salad();
        recipe.category = Some("Salads".to_string());
        let html = render_card(&recipe, false);
        assert!(html.contains("<span class=\"category\">Salads</span>"));
    }
}
