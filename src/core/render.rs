//! HTML fragments for the four result panels and the page that hosts them.

use crate::domain::model::{GameMetadata, Panel, PriceOffer, StreamEntry, VideoCandidate};

pub const NO_OFFERS: &str = "No offers available.";
pub const NO_VIDEOS: &str = "No relevant videos found.";
pub const NO_STREAMS: &str = "No streams available.";
pub const LOAD_FAILURE: &str = "Error loading data.";

pub const EMPTY_QUERY_NOTICE: &str = "Enter a game name.";
pub const NO_VIDEOS_NOTICE: &str = "No trailers or gameplay videos found for this game.";
pub const NO_STREAMS_NOTICE: &str = "No live streams found for this game.";

const TWITCH_PROFILE_BASE: &str = "https://www.twitch.tv/";

pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

pub fn loading() -> String {
    r#"<div class="spinner"></div>"#.to_string()
}

/// A single paragraph, used for placeholders and upstream error messages.
pub fn message(text: &str) -> String {
    format!("<p>{}</p>", escape(text))
}

pub fn game_metadata(game: &GameMetadata) -> String {
    let rating = game
        .rating
        .map(|r| r.to_string())
        .unwrap_or_else(|| "N/A".to_string());

    format!(
        concat!(
            "<h2>{name}</h2>\n",
            "<img src=\"{image}\" alt=\"Game Image\" class=\"game-image\"/>\n",
            "<p><strong>Description:</strong> {description}</p>\n",
            "<p><strong>Release date:</strong> {release_date}</p>\n",
            "<p><strong>Platforms:</strong> {platforms}</p>\n",
            "<p><strong>Rating:</strong> {rating}</p>"
        ),
        name = escape(&game.name),
        image = escape(&game.image),
        description = escape(&game.description),
        release_date = escape(&game.release_date),
        platforms = escape(&game.platforms.join(", ")),
        rating = rating,
    )
}

pub fn price_table(offers: &[PriceOffer]) -> String {
    let mut html = String::from(concat!(
        "<h3>Prices and Discounts</h3>\n",
        "<table border=\"1\">\n",
        "<tr><th>Store</th><th>Normal Price</th><th>Sale Price</th><th>Link</th></tr>\n"
    ));

    for offer in offers {
        html.push_str(&format!(
            "<tr><td>{}</td><td>${:.2}</td><td><strong>${:.2}</strong></td><td><a href=\"{}\" target=\"_blank\">Buy</a></td></tr>\n",
            escape(&offer.store_name),
            offer.normal_price,
            offer.sale_price,
            escape(&offer.deal_link),
        ));
    }

    html.push_str("</table>");
    html
}

pub fn video_players(videos: &[VideoCandidate]) -> String {
    videos
        .iter()
        .map(|video| {
            format!(
                "<iframe width=\"300\" height=\"200\" src=\"{}\" title=\"{}\" frameborder=\"0\" allowfullscreen></iframe>",
                escape(&video.embed_url),
                escape(&video.title),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn stream_cards(streams: &[StreamEntry]) -> String {
    streams
        .iter()
        .map(|stream| {
            let user = escape(&stream.user_name);
            format!(
                concat!(
                    "<div class=\"stream\">\n",
                    "<a href=\"{profile}{user}\" target=\"_blank\">",
                    "<img src=\"{thumbnail}\" alt=\"{user}\" class=\"stream-thumbnail\"></a>\n",
                    "<p><strong>{user}</strong> ({viewers} viewers)</p>\n",
                    "</div>"
                ),
                profile = TWITCH_PROFILE_BASE,
                user = user,
                thumbnail = escape(&stream.thumbnail_url),
                viewers = stream.viewer_count,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Full document with one section per panel, in `Panel::ALL` order.
pub fn page(panels: &[(Panel, String)]) -> String {
    let mut sections = String::new();
    for panel in Panel::ALL {
        let body = panels
            .iter()
            .find(|(p, _)| *p == panel)
            .map(|(_, html)| html.as_str())
            .unwrap_or_default();
        sections.push_str(&format!(
            "<section>\n<h1>{}</h1>\n<div id=\"{}\">\n{}\n</div>\n</section>\n",
            panel.title(),
            panel.id(),
            body
        ));
    }

    format!(
        concat!(
            "<!DOCTYPE html>\n",
            "<html lang=\"en\">\n",
            "<head>\n<meta charset=\"utf-8\">\n<title>LootBox</title>\n</head>\n",
            "<body>\n{}</body>\n",
            "</html>\n"
        ),
        sections
    )
}
