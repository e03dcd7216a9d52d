use crate::model::Recipe;

/// Recipes whose title, description or any ingredient contains `query`,
/// ignoring case. A blank query keeps every recipe. Order is preserved.
pub fn filter_recipes<'a>(recipes: &'a [Recipe], query: &str) -> Vec<&'a Recipe> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return recipes.iter().collect();
    }

    recipes
        .iter()
        .filter(|recipe| matches(recipe, &needle))
        .collect()
}

/// `needle` must already be lowercased
pub fn matches(recipe: &Recipe, needle: &str) -> bool {
    recipe.title.to_lowercase().contains(needle)
        || recipe.description.to_lowercase().contains(needle)
        || recipe
            .ingredients
            .iter()
            .any(|ingredient| ingredient.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Difficulty;

    fn recipe(id: u32, title: &str, description: &str, ingredients: &[&str]) -> Recipe {
        Recipe {
            id,
            title: title.to_string(),
            time: 10,
            difficulty: Difficulty::Medium,
            description: description.to_string(),
            ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
            steps: Vec::new(),
            category: None,
        }
    }

    #[test]
    fn test_matches_each_field() {
        let recipes = vec![
            recipe(1, "Lemon Tart", "", &[]),
            recipe(2, "Soup", "Bright with LEMON zest", &[]),
            recipe(3, "Fish", "", &["Butter", "Lemons"]),
            recipe(4, "Bread", "Plain", &["Flour"]),
        ];

        let ids: Vec<u32> = filter_recipes(&recipes, "lemon").iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_blank_query_returns_everything() {
        let recipes = vec![recipe(2, "B", "", &[]), recipe(1, "A", "", &[])];

        for query in ["", "   ", "\t\n"] {
            let result = filter_recipes(&recipes, query);
            assert_eq!(result.len(), 2);
            assert_eq!(result[0].id, 2);
            assert_eq!(result[1].id, 1);
        }
    }

    #[test]
    fn test_query_is_trimmed() {
        let recipes = vec![recipe(1, "Greek Salad", "", &[])];
        assert_eq!(filter_recipes(&recipes, "  salad ").len(), 1);
    }

    #[test]
    fn test_no_ingredients_never_matches_on_ingredients() {
        let recipes = vec![recipe(1, "Toast", "Warm bread", &[])];
        assert!(filter_recipes(&recipes, "butter").is_empty());
    }
}
