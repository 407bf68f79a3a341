//! The built-in, canned reply table.

use super::ReplySource;
use crate::error::Result;
use once_cell::sync::Lazy;

struct Topic {
    keywords: &'static [&'static str],
    reply: &'static str,
}

const DEFAULT_REPLY: &str = "I'm here to help with all your cooking questions! Ask me about specific recipes, ingredients, cooking techniques, meal planning, or dietary restrictions.";

// Checked in order; the first topic with a matching keyword wins.
static TOPICS: Lazy<Vec<Topic>> = Lazy::new(|| {
    vec![
        Topic {
            keywords: &["hello"],
            reply: "Hello! I'm your recipe assistant. What would you like to cook today?",
        },
        Topic {
            keywords: &["help"],
            reply: "I can help you with recipes, cooking tips, ingredient substitutions, and meal planning. Try asking about specific dishes or ingredients!",
        },
        Topic {
            keywords: &["pasta"],
            reply: "For a quick pasta dish, try aglio e olio: spaghetti with garlic, olive oil, red pepper flakes, and parsley. Cook pasta al dente, sauté minced garlic in olive oil, toss together with pasta water. Simple and delicious!",
        },
        Topic {
            keywords: &["chicken"],
            reply: "Chicken is versatile! For juicy baked chicken: season with salt, pepper, garlic powder, and herbs. Bake at 425°F for 20-25 minutes. Internal temp should reach 165°F. Let rest 5 minutes before serving.",
        },
        Topic {
            keywords: &["vegetarian"],
            reply: "Great veggie options: Try stuffed bell peppers with quinoa and black beans, or a hearty lentil curry with coconut milk. Both are protein-rich and satisfying!",
        },
        Topic {
            keywords: &["dessert"],
            reply: "For a quick dessert, try chocolate mug cake: mix 4 tbsp flour, 4 tbsp sugar, 2 tbsp cocoa powder, 3 tbsp milk, 3 tbsp oil, and a pinch of salt. Microwave for 90 seconds!",
        },
        Topic {
            keywords: &["breakfast"],
            reply: "Quick breakfast ideas: overnight oats with berries, avocado toast with everything bagel seasoning, or scrambled eggs with herbs. All ready in minutes!",
        },
        Topic {
            keywords: &["substitution", "substitute", "replace"],
            reply: "Common substitutions: 1 egg = 1/4 cup applesauce, 1 cup milk = 1 cup almond milk, 1 cup butter = 3/4 cup olive oil. What ingredient do you need to substitute?",
        },
        Topic {
            keywords: &["time", "quick", "fast", "minutes"],
            reply: "For quick meals (under 30 min): stir-fries, pasta dishes, grilled sandwiches, or sheet pan meals. What's your time limit?",
        },
        Topic {
            keywords: &["healthy", "diet", "nutrition"],
            reply: "Healthy cooking tips: use herbs and spices instead of salt, bake or grill instead of frying, add vegetables to every meal, and choose whole grains over refined ones.",
        },
    ]
});

/// Matches the message against a fixed keyword table, ignoring case.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeywordReplies;

impl KeywordReplies {
    pub fn lookup(message: &str) -> &'static str {
        let lower = message.to_lowercase();
        TOPICS
            .iter()
            .find(|topic| topic.keywords.iter().any(|k| lower.contains(k)))
            .map(|topic| topic.reply)
            .unwrap_or(DEFAULT_REPLY)
    }
}

impl ReplySource for KeywordReplies {
    fn reply(&self, message: &str) -> Result<String> {
        Ok(Self::lookup(message).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_keywords_ignoring_case() {
        assert!(KeywordReplies::lookup("Any PASTA ideas?").starts_with("For a quick pasta dish"));
        assert!(KeywordReplies::lookup("chicken tonight").starts_with("Chicken is versatile"));
    }

    #[test]
    fn alternate_keywords_reach_their_topic() {
        assert!(KeywordReplies::lookup("can I replace butter?").starts_with("Common substitutions"));
        assert!(KeywordReplies::lookup("something fast").starts_with("For quick meals"));
        assert!(KeywordReplies::lookup("on a diet").starts_with("Healthy cooking tips"));
    }

    #[test]
    fn earlier_topics_win() {
        // "hello" comes before "pasta" in the table
        assert!(KeywordReplies::lookup("hello, pasta please").starts_with("Hello!"));
        // "pasta" comes before "time"
        assert!(KeywordReplies::lookup("quick pasta").starts_with("For a quick pasta dish"));
    }

    #[test]
    fn unknown_message_gets_the_default() {
        assert_eq!(KeywordReplies::lookup("what is sushi"), DEFAULT_REPLY);
    }
}
