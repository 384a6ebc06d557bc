//! Canned example documents for `tidyplan sample`.

/// A modern-schema example template.
pub const MODERN_SAMPLE: &str = r#"{
  "name": "Garage overhaul",
  "description": "Reclaim the garage over three weekends.",
  "goal": "A garage the car actually fits in",
  "category": "declutter",
  "version": "2.0",
  "phases": [
    {
      "title": "Sort",
      "description": "Everything gets a pile.",
      "order": 0,
      "prerequisites": [],
      "taskLists": [
        {
          "name": "Workbench",
          "color": "green",
          "order": 0,
          "tasks": [
            {
              "title": "Clear the bench surface",
              "priority": "high",
              "tags": ["weekend-1"],
              "dependsOn": [],
              "subtasks": []
            },
            {
              "title": "Label the parts drawers",
              "priority": "low",
              "isOptional": true,
              "tags": [],
              "dependsOn": [],
              "subtasks": []
            }
          ]
        }
      ]
    },
    {
      "title": "Purge",
      "order": 1,
      "prerequisites": ["Sort"],
      "taskLists": [
        {
          "name": "Donation run",
          "color": "yellow",
          "order": 0,
          "tasks": [
            {
              "title": "Drop boxes at the donation center",
              "priority": "medium",
              "deadline": "2026-09-01",
              "tags": [],
              "dependsOn": [],
              "subtasks": []
            }
          ]
        }
      ]
    }
  ],
  "metadata": {
    "author": "sam",
    "difficulty": "beginner",
    "tags": ["garage", "seasonal"]
  }
}"#;

/// A legacy flat-steps example template, as older exports produced it.
pub const LEGACY_SAMPLE: &str = r#"{
  "name": "Wardrobe reset",
  "description": "One afternoon, one closet.",
  "category": "Closet",
  "steps": [
    {
      "title": "Empty the closet",
      "order": 0,
      "tasks": [
        { "title": "Pile everything on the bed", "priority": "high" },
        { "title": "Wipe the shelves" }
      ]
    },
    {
      "title": "Decide and rehang",
      "order": 1,
      "prerequisites": ["Empty the closet"],
      "tasks": [
        { "title": "Try on the maybes", "priority": "LOW" },
        { "title": "Bag the giveaways", "priority": "someday" }
      ]
    }
  ],
  "metadata": {
    "difficulty": "easy"
  }
}"#;
