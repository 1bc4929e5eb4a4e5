use crate::domain::model::VideoCandidate;

const RELEVANCE_KEYWORDS: [&str; 2] = ["trailer", "gameplay"];

/// Keeps candidates whose title mentions the game and is a trailer or gameplay video.
///
/// Matching is case-insensitive and input order is preserved.
pub fn filter_relevant(candidates: &[VideoCandidate], canonical_name: &str) -> Vec<VideoCandidate> {
    let name = canonical_name.to_lowercase();

    candidates
        .iter()
        .filter(|candidate| {
            let title = candidate.title.to_lowercase();
            title.contains(&name)
                && RELEVANCE_KEYWORDS
                    .iter()
                    .any(|keyword| title.contains(keyword))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(title: &str) -> VideoCandidate {
        VideoCandidate {
            title: title.to_string(),
            embed_url: format!("https://www.youtube.com/embed/{}", title.len()),
        }
    }

    #[test]
    fn test_keeps_trailer_and_drops_review() {
        let candidates = vec![video("Halo Infinite Trailer"), video("Halo Infinite Review")];
        let relevant = filter_relevant(&candidates, "Halo Infinite");
        assert_eq!(relevant, vec![candidates[0].clone()]);
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(filter_relevant(&[], "Anything").is_empty());
    }

    #[test]
    fn test_matching_ignores_case() {
        let candidates = vec![
            video("HALO INFINITE - Official GAMEPLAY"),
            video("halo infinite trailer"),
        ];
        let relevant = filter_relevant(&candidates, "Halo Infinite");
        assert_eq!(relevant.len(), 2);
    }

    #[test]
    fn test_requires_the_game_name() {
        let candidates = vec![video("Halo 3 Trailer"), video("Best gameplay moments")];
        assert!(filter_relevant(&candidates, "Halo Infinite").is_empty());
    }

    #[test]
    fn test_preserves_input_order() {
        let candidates = vec![
            video("Portal 2 Gameplay Part 1"),
            video("Portal 2 Unboxing"),
            video("Portal 2 Launch Trailer"),
            video("Portal 2 Gameplay Part 2"),
        ];
        let titles: Vec<_> = filter_relevant(&candidates, "portal 2")
            .into_iter()
            .map(|v| v.title)
            .collect();
        assert_eq!(
            titles,
            vec![
                "Portal 2 Gameplay Part 1",
                "Portal 2 Launch Trailer",
                "Portal 2 Gameplay Part 2"
            ]
        );
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let candidates = vec![
            video("Celeste Trailer"),
            video("Celeste Speedrun"),
            video("Celeste gameplay walkthrough"),
        ];
        let once = filter_relevant(&candidates, "Celeste");
        let twice = filter_relevant(&once, "Celeste");
        assert_eq!(once, twice);
    }
}
