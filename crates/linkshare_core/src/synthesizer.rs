//! crates/linkshare_core/src/synthesizer.rs
//!
//! Produces plausible descriptive metadata for a link in place of real content
//! analysis. Every choice goes through the injected `RandomSource`.

use async_trait::async_trait;
use std::sync::Arc;

use crate::classifier;
use crate::domain::{Category, PreviewDraft};
use crate::ports::{PortResult, PreviewGenerator, RandomSource};

/// Fewest tags a synthesized record carries; up to two more may follow.
pub const MIN_TAGS: usize = 2;
const EXTRA_TAG_CHOICES: usize = 3;

pub const THUMBNAILS: [&str; 5] = [
    "https://images.unsplash.com/photo-1501854140801-50d01698950b?ixlib=rb-4.0.3&auto=format&fit=crop&w=2340&q=80",
    "https://images.unsplash.com/photo-1470071459604-3b5ec3a7fe05?ixlib=rb-4.0.3&auto=format&fit=crop&w=2340&q=80",
    "https://images.unsplash.com/photo-1433086966358-54859d0ed716?ixlib=rb-4.0.3&auto=format&fit=crop&w=2340&q=80",
    "https://images.unsplash.com/photo-1475924156734-496f6cac6ec1?ixlib=rb-4.0.3&auto=format&fit=crop&w=2340&q=80",
    "https://images.unsplash.com/photo-1418065460487-3e41a6c84dc5?ixlib=rb-4.0.3&auto=format&fit=crop&w=2340&q=80",
];

/// The three candidate descriptions for a category.
pub fn descriptions(category: Category) -> [&'static str; 3] {
    match category {
        Category::Cooking => ["Delicious recipe tutorial", "Easy cooking guide", "Professional chef tips"],
        Category::Funny => ["Hilarious moments compilation", "Comedy gold content", "Laugh-out-loud videos"],
        Category::Tutorial => ["Step-by-step guide", "Learn something new", "Educational content"],
        Category::Music => ["Amazing musical performance", "Latest music trends", "Artist spotlight"],
        Category::Travel => ["Breathtaking destinations", "Travel adventure", "Explore the world"],
        Category::Sports => ["Athletic highlights", "Sports training tips", "Game analysis"],
        Category::Gaming => ["Epic gaming moments", "Game tutorials", "Gaming highlights"],
        Category::Lifestyle => ["Daily life inspiration", "Lifestyle tips", "Personal growth"],
        Category::Tech => ["Latest technology trends", "Tech reviews", "Innovation showcase"],
        Category::Other => ["Interesting content", "Must-watch video", "Trending now"],
    }
}

/// The ordered tag list a category's tags are a prefix of.
pub fn tag_pool(category: Category) -> [&'static str; 5] {
    match category {
        Category::Cooking => ["recipe", "food", "chef", "kitchen", "delicious"],
        Category::Funny => ["comedy", "humor", "entertainment", "viral", "laughter"],
        Category::Tutorial => ["howto", "education", "learning", "guide", "tips"],
        Category::Music => ["song", "artist", "melody", "performance", "audio"],
        Category::Travel => ["adventure", "destination", "explore", "journey", "culture"],
        Category::Sports => ["fitness", "training", "athlete", "competition", "health"],
        Category::Gaming => ["game", "player", "esports", "strategy", "fun"],
        Category::Lifestyle => ["daily", "inspiration", "wellness", "personal", "growth"],
        Category::Tech => ["technology", "innovation", "digital", "gadget", "future"],
        Category::Other => ["trending", "popular", "viral", "interesting", "new"],
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    pub description: String,
    pub tags: Vec<String>,
}

/// Draws categories, descriptions, tags and thumbnails from a random source.
#[derive(Clone)]
pub struct Synthesizer {
    random: Arc<dyn RandomSource>,
}

impl Synthesizer {
    pub fn new(random: Arc<dyn RandomSource>) -> Self {
        Self { random }
    }

    /// Uniform choice over the whole category set.
    pub fn random_category(&self) -> Category {
        Category::ALL[self.random.pick(Category::ALL.len())]
    }

    pub fn synthesize(&self, category: Category) -> Metadata {
        let candidates = descriptions(category);
        let description = candidates[self.random.pick(candidates.len())].to_string();

        let count = MIN_TAGS + self.random.pick(EXTRA_TAG_CHOICES);
        let tags = tag_pool(category)
            .iter()
            .take(count)
            .map(|t| t.to_string())
            .collect();

        Metadata { description, tags }
    }

    pub fn random_thumbnail(&self) -> String {
        THUMBNAILS[self.random.pick(THUMBNAILS.len())].to_string()
    }
}

//=========================================================================================
// In-Process Preview Generator
//=========================================================================================

/// A `PreviewGenerator` that classifies the URL and synthesizes the rest,
/// without any network access or delay.
#[derive(Clone)]
pub struct SynthesizingGenerator {
    synthesizer: Synthesizer,
}

impl SynthesizingGenerator {
    pub fn new(random: Arc<dyn RandomSource>) -> Self {
        Self {
            synthesizer: Synthesizer::new(random),
        }
    }

    pub fn draft(&self, url: &str) -> PreviewDraft {
        let classification = classifier::classify(url);
        let category = self.synthesizer.random_category();
        let Metadata { description, tags } = self.synthesizer.synthesize(category);
        PreviewDraft {
            title: classification.title,
            image: Some(self.synthesizer.random_thumbnail()),
            platform: classification.platform,
            domain: classification.domain,
            category,
            description,
            tags,
        }
    }
}

#[async_trait]
impl PreviewGenerator for SynthesizingGenerator {
    async fn generate(&self, url: &str) -> PortResult<PreviewDraft> {
        Ok(self.draft(url))
    }
}
