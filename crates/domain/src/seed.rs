//! The fixed activity table loaded once at process start.

use crate::activity::Activity;

struct SeedActivity {
    name: &'static str,
    description: &'static str,
    schedule: &'static str,
    max_participants: u32,
    participants: &'static [&'static str],
}

const SEED: &[SeedActivity] = &[
    SeedActivity {
        name: "Chess Club",
        description: "Learn strategies and compete in chess tournaments",
        schedule: "Fridays, 3:30 PM - 5:00 PM",
        max_participants: 12,
        participants: &["michael@mergington.edu", "daniel@mergington.edu"],
    },
    SeedActivity {
        name: "Programming Class",
        description: "Learn programming fundamentals and build software projects",
        schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        max_participants: 20,
        participants: &["emma@mergington.edu", "sophia@mergington.edu"],
    },
    SeedActivity {
        name: "Gym Class",
        description: "Physical education and sports activities",
        schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        max_participants: 30,
        participants: &["john@mergington.edu", "olivia@mergington.edu"],
    },
    SeedActivity {
        name: "Basketball Team",
        description: "Competitive basketball league and practice",
        schedule: "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
        max_participants: 15,
        participants: &["alex@mergington.edu"],
    },
    SeedActivity {
        name: "Tennis Club",
        description: "Learn and play tennis with fellow students",
        schedule: "Saturdays, 10:00 AM - 12:00 PM",
        max_participants: 8,
        participants: &["james@mergington.edu", "sarah@mergington.edu"],
    },
    SeedActivity {
        name: "Drama Club",
        description: "Perform in plays and theatrical productions",
        schedule: "Thursdays, 4:00 PM - 5:30 PM",
        max_participants: 25,
        participants: &["mia@mergington.edu", "lucas@mergington.edu"],
    },
    SeedActivity {
        name: "Art Studio",
        description: "Explore painting, drawing, and sculpture",
        schedule: "Wednesdays, 3:30 PM - 5:00 PM",
        max_participants: 18,
        participants: &["charlotte@mergington.edu"],
    },
    SeedActivity {
        name: "Debate Team",
        description: "Compete in debate competitions and develop argumentation skills",
        schedule: "Tuesdays, 3:30 PM - 5:00 PM",
        max_participants: 10,
        participants: &["noah@mergington.edu", "ava@mergington.edu"],
    },
    SeedActivity {
        name: "Science Olympiad",
        description: "Participate in science competitions and experiments",
        schedule: "Fridays, 4:00 PM - 5:30 PM",
        max_participants: 15,
        participants: &["mason@mergington.edu"],
    },
];

/// The nine activities every fresh directory starts with, in listing order.
#[must_use]
pub fn activities() -> Vec<Activity> {
    SEED.iter()
        .map(|seed| Activity {
            name: seed.name.to_string(),
            description: seed.description.to_string(),
            schedule: seed.schedule.to_string(),
            max_participants: seed.max_participants,
            participants: seed.participants.iter().map(ToString::to_string).collect(),
        })
        .collect()
}
