use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::StatusFilter;
use crate::store::RecipeStore;

use super::helpers::indexed_recipes;

/// Lists recipes matching `search` and `filter`, in collection order.
///
/// A recipe matches the search when its name, any ingredient or its cuisine
/// contains the term, ignoring case. An empty term matches everything. The
/// store only hands out copies, so filtering can never touch the collection.
pub fn run<S: RecipeStore>(store: &S, search: &str, filter: StatusFilter) -> Result<CmdResult> {
    let term_lower = search.to_lowercase();
    let listed = indexed_recipes(store)?
        .into_iter()
        .filter(|dr| dr.recipe.matches(&term_lower))
        .filter(|dr| filter.accepts(&dr.recipe.status))
        .collect();

    Ok(CmdResult::default().with_listed_recipes(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::DisplayIndex;
    use crate::model::StatusFlag;
    use crate::store::memory::fixtures::StoreFixture;

    fn names(result: &CmdResult) -> Vec<&str> {
        result
            .listed_recipes
            .iter()
            .map(|dr| dr.recipe.name.as_str())
            .collect()
    }

    fn fixture() -> StoreFixture {
        StoreFixture::seeded()
            .with_flagged_recipe(
                "Chicken Tikka",
                "Indian",
                &["chicken", "yogurt"],
                &[StatusFlag::WantToTry],
            )
            .with_recipe("Pad Thai", "Thai", &["rice noodles", "Chicken stock"])
            .with_flagged_recipe(
                "Tiramisu",
                "Italian",
                &["mascarpone"],
                &[StatusFlag::Favorite, StatusFlag::WantToTry],
            )
    }

    #[test]
    fn empty_search_lists_everything_in_order() {
        let fixture = fixture();
        let result = run(&fixture.store, "", StatusFilter::All).unwrap();
        assert_eq!(
            names(&result),
            vec!["Spaghetti Carbonara", "Chicken Tikka", "Pad Thai", "Tiramisu"]
        );
    }

    #[test]
    fn matches_inside_an_ingredient() {
        let fixture = StoreFixture::seeded();
        let result = run(&fixture.store, "pancetta", StatusFilter::All).unwrap();
        assert_eq!(names(&result), vec!["Spaghetti Carbonara"]);
    }

    #[test]
    fn no_match_is_empty() {
        let fixture = StoreFixture::seeded();
        let result = run(&fixture.store, "sushi", StatusFilter::All).unwrap();
        assert!(result.listed_recipes.is_empty());
    }

    #[test]
    fn search_ignores_case_across_fields() {
        let fixture = fixture();
        // name, ingredient and cuisine hits
        assert_eq!(
            names(&run(&fixture.store, "CHICKEN", StatusFilter::All).unwrap()),
            vec!["Chicken Tikka", "Pad Thai"]
        );
        assert_eq!(
            names(&run(&fixture.store, "italian", StatusFilter::All).unwrap()),
            vec!["Spaghetti Carbonara", "Tiramisu"]
        );
    }

    #[test]
    fn search_does_not_look_at_instructions() {
        let fixture = fixture();
        let result = run(&fixture.store, "cook it", StatusFilter::All).unwrap();
        assert!(result.listed_recipes.is_empty());
    }

    #[test]
    fn search_results_are_sound_and_complete() {
        let fixture = fixture();
        let all = run(&fixture.store, "", StatusFilter::All).unwrap();
        for term in ["a", "ti", "CHI", "noodle", "xyz", ""] {
            let lower = term.to_lowercase();
            let result = run(&fixture.store, term, StatusFilter::All).unwrap();
            let expected: Vec<_> = all
                .listed_recipes
                .iter()
                .filter(|dr| {
                    dr.recipe.name.to_lowercase().contains(&lower)
                        || dr
                            .recipe
                            .ingredients
                            .iter()
                            .any(|i| i.to_lowercase().contains(&lower))
                        || dr.recipe.metadata.cuisine.to_lowercase().contains(&lower)
                })
                .map(|dr| dr.recipe.id)
                .collect();
            let got: Vec<_> = result.listed_recipes.iter().map(|dr| dr.recipe.id).collect();
            assert_eq!(got, expected, "term {:?}", term);
        }
    }

    #[test]
    fn status_filters_only_return_flagged_recipes() {
        let fixture = fixture();
        assert_eq!(
            names(&run(&fixture.store, "", StatusFilter::Favorites).unwrap()),
            vec!["Spaghetti Carbonara", "Tiramisu"]
        );
        assert_eq!(
            names(&run(&fixture.store, "", StatusFilter::ToTry).unwrap()),
            vec!["Chicken Tikka", "Tiramisu"]
        );
        assert_eq!(
            names(&run(&fixture.store, "", StatusFilter::Made).unwrap()),
            vec!["Spaghetti Carbonara"]
        );
    }

    #[test]
    fn search_and_filter_combine() {
        let fixture = fixture();
        let result = run(&fixture.store, "italian", StatusFilter::ToTry).unwrap();
        assert_eq!(names(&result), vec!["Tiramisu"]);
    }

    #[test]
    fn filtered_view_keeps_collection_indexes() {
        let fixture = fixture();
        let result = run(&fixture.store, "tiramisu", StatusFilter::All).unwrap();
        assert_eq!(result.listed_recipes[0].index, DisplayIndex(4));
    }
}
