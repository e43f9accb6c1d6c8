//! Idempotent sample-data seeder.
//!
//! Populates an empty database with 10 synthetic users and 1-5 posts per
//! user. A database that already has users is left untouched. All inserts run
//! on the caller's session, so seeding is a single transaction when invoked
//! through `with_session`.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::session::Session;
use super::{posts, users};
use crate::error::AppResult;
use crate::models::PostAuthor;

const USER_COUNT: usize = 10;
const MIN_POSTS_PER_USER: usize = 1;
const MAX_POSTS_PER_USER: usize = 5;

const ADJECTIVES: &[&str] = &[
    "swift", "quiet", "bright", "clever", "gentle", "bold", "curious", "patient", "eager", "calm",
];
const NOUNS: &[&str] = &[
    "falcon", "otter", "willow", "harbor", "ember", "meadow", "summit", "cedar", "lantern",
    "raven",
];
const EMAIL_DOMAINS: &[&str] = &["example.com", "example.org", "example.net"];
const TOPICS: &[&str] = &[
    "gardening", "astronomy", "sourdough", "cycling", "watercolor", "chess", "birdwatching",
    "woodworking", "photography", "hiking",
];
const SENTENCE_STARTS: &[&str] = &[
    "Lately I have been thinking about",
    "A short note on",
    "Some first impressions of",
    "What nobody tells you about",
    "My weekend experiment with",
];
const SENTENCE_ENDS: &[&str] = &[
    "and it went better than expected.",
    "though there is plenty left to learn.",
    "which turned out to be surprisingly hard.",
    "and I would recommend it to anyone.",
    "despite the weather not cooperating.",
];

/// Outcome of a seeding run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedSummary {
    /// False when the database already had data and seeding was skipped.
    pub seeded: bool,
    pub users: usize,
    pub posts: usize,
}

struct UserSeed {
    username: String,
    email: String,
    posts: Vec<(String, String)>,
}

/// Seed the database with sample data unless it already has users.
pub async fn seed(session: &mut Session) -> AppResult<SeedSummary> {
    if users::count(session).await? > 0 {
        debug!("Database already has data, skipping seed");
        return Ok(SeedSummary {
            seeded: false,
            users: 0,
            posts: 0,
        });
    }

    // Generate everything up front; the RNG is not held across awaits.
    let seeds = generate_seed_data();

    let mut post_total = 0;
    for seed in &seeds {
        let user = users::insert(session, &seed.username, &seed.email).await?;
        let author = PostAuthor {
            id: user.id,
            username: user.username.clone(),
        };
        for (title, content) in &seed.posts {
            posts::insert(session, title, content, &author).await?;
            post_total += 1;
        }
    }

    Ok(SeedSummary {
        seeded: true,
        users: seeds.len(),
        posts: post_total,
    })
}

/// Randomized user/post content. The user index is baked into usernames and
/// emails so the UNIQUE constraints cannot collide within one run.
fn generate_seed_data() -> Vec<UserSeed> {
    let mut rng = rand::thread_rng();

    (0..USER_COUNT)
        .map(|i| {
            let adjective = pick(&mut rng, ADJECTIVES);
            let noun = pick(&mut rng, NOUNS);
            let username = format!("{}_{}{}", adjective, noun, i + 1);
            let email = format!(
                "{}.{}{}@{}",
                adjective,
                noun,
                i + 1,
                pick(&mut rng, EMAIL_DOMAINS)
            );

            let post_count = rng.gen_range(MIN_POSTS_PER_USER..=MAX_POSTS_PER_USER);
            let posts = (0..post_count)
                .map(|_| {
                    let topic = pick(&mut rng, TOPICS);
                    let title = format!("{} {}", pick(&mut rng, SENTENCE_STARTS), topic);
                    let content = (0..5)
                        .map(|_| {
                            format!(
                                "{} {} {}",
                                pick(&mut rng, SENTENCE_STARTS),
                                pick(&mut rng, TOPICS),
                                pick(&mut rng, SENTENCE_ENDS)
                            )
                        })
                        .collect::<Vec<_>>()
                        .join(" ");
                    (title, content)
                })
                .collect();

            UserSeed {
                username,
                email,
                posts,
            }
        })
        .collect()
}

fn pick<'a>(rng: &mut impl Rng, words: &[&'a str]) -> &'a str {
    words.choose(rng).copied().unwrap_or(words[0])
}
