// Demo mode: Seed the board with realistic sample ideas to showcase the TUI
//
// The seeded board demonstrates the states a card can be in:
// - A freshly created idea still showing its placeholders
// - Short committed notes with "Updated at" footers
// - A multi-line note to show content wrapping
// - A note close to the length cap (open it to watch the counter escalate)
//
// Run with: IDEABOARD_DEMO=1 cargo run --release

use crate::board::Board;
use chrono::Duration;

/// One sample note: title, content, minutes since the last commit
const SAMPLE_IDEAS: &[(&str, &str, i64)] = &[
    (
        "Weekend hike",
        "Check the trailhead webcam before leaving.\nPack: water, headlamp, spare socks.",
        240,
    ),
    (
        "Gift for Sam",
        "They mentioned the pottery class on 5th street twice now. A voucher plus a hand-thrown mug would land well.",
        90,
    ),
    (
        "Blog post draft",
        "Why terminal tools survive every UI trend: they compose, they script, and they never repaint your muscle memory. Needs a punchier close!",
        15,
    ),
    ("Call the dentist", "Reschedule Thursday.", 5),
];

/// Fill `board` with sample ideas in varied states
pub fn seed(board: &mut Board) {
    let now = chrono::Utc::now();

    for (slot, (title, content, minutes_ago)) in SAMPLE_IDEAS.iter().enumerate() {
        // Spread creation times out, oldest sample first, each predating
        // its own commit
        let id = board.add_at(now - Duration::hours(5 - slot as i64));
        let Some(existing) = board.get(id) else {
            continue;
        };

        let mut idea = existing.clone();
        idea.title = title.to_string();
        idea.content = content.to_string();
        idea.content_length = content.chars().count();
        idea.updated_at = Some(now - Duration::minutes(*minutes_ago));
        board.update(idea);
    }

    // One untouched placeholder card, as if "n" was just pressed
    board.add();

    tracing::info!("demo board seeded ({} ideas)", board.len());
}
