//! Built-in starter sequences.
//!
//! These are the authored templates the gallery seeds from when a user has no
//! saved library yet. They are constructed in code rather than shipped as
//! JSON so they always track the current model shape.

use crate::sequence::model::{
    AnimationElement, AnimationSequence, AnimationStep, AnimationType, Difficulty, ElementKind,
    StepQuiz, TriggerType,
};

/// All built-in templates, in gallery order. Every returned sequence passes
/// [`AnimationSequence::validate`].
pub fn builtin_templates() -> Vec<AnimationSequence> {
    vec![photosynthesis(), solar_system(), projectile_motion()]
}

fn element(
    id: &str,
    kind: ElementKind,
    content: &str,
    x: f64,
    y: f64,
    color: &str,
) -> AnimationElement {
    AnimationElement {
        id: id.to_string(),
        kind,
        content: Some(content.to_string()),
        x: Some(x),
        y: Some(y),
        width: None,
        height: None,
        color: Some(color.to_string()),
        opacity: None,
        rotation: None,
    }
}

fn step(
    id: &str,
    number: u32,
    title: &str,
    description: &str,
    animation_type: AnimationType,
    elements: Vec<AnimationElement>,
) -> AnimationStep {
    AnimationStep {
        id: id.to_string(),
        step: number,
        title: title.to_string(),
        description: description.to_string(),
        narration: None,
        animation_type,
        trigger: TriggerType::Click,
        duration: Some(1.0),
        delay: None,
        elements,
        quiz: None,
    }
}

fn photosynthesis() -> AnimationSequence {
    let mut steps = vec![
        step(
            "photo-1",
            1,
            "Sunlight Arrives",
            "Light energy from the sun reaches the leaf surface.",
            AnimationType::FadeIn,
            vec![
                element("light", ElementKind::Shape, "☀️", 20.0, 15.0, "#F4A300"),
                element("leaf", ElementKind::Shape, "🍃", 50.0, 55.0, "#2A9D8F"),
            ],
        ),
        step(
            "photo-2",
            2,
            "Water and CO₂ Enter",
            "Roots draw up water while stomata take in carbon dioxide.",
            AnimationType::SlideUp,
            vec![
                element("water", ElementKind::Text, "H₂O", 25.0, 75.0, "#457B9D"),
                element("co2", ElementKind::Text, "CO₂", 70.0, 40.0, "#6C757D"),
            ],
        ),
        step(
            "photo-3",
            3,
            "Glucose and Oxygen",
            "Chloroplasts convert the inputs into glucose, releasing oxygen.",
            AnimationType::Scale,
            vec![
                element("glucose", ElementKind::Text, "C₆H₁₂O₆", 40.0, 50.0, "#E63946"),
                element("oxygen", ElementKind::Text, "O₂", 75.0, 25.0, "#2A9D8F"),
            ],
        ),
    ];
    steps[2].quiz = Some(StepQuiz {
        question: "Which gas is released during photosynthesis?".to_string(),
        options: vec![
            "Carbon dioxide".to_string(),
            "Oxygen".to_string(),
            "Nitrogen".to_string(),
        ],
        correct: 1,
    });
    steps[0].narration = Some(
        "Photosynthesis begins when sunlight strikes the chlorophyll in a leaf.".to_string(),
    );

    AnimationSequence {
        id: "template-photosynthesis".to_string(),
        title: "Photosynthesis Explained".to_string(),
        topic: "Biology".to_string(),
        thumbnail: None,
        description: Some("How plants turn light, water, and CO₂ into food.".to_string()),
        total_steps: 3,
        steps,
        auto_play: Some(false),
        auto_play_delay: Some(4.0),
        difficulty: Some(Difficulty::Beginner),
        tags: Some(vec!["Biology".to_string(), "Plants".to_string()]),
    }
}

fn solar_system() -> AnimationSequence {
    let steps = vec![
        step(
            "solar-1",
            1,
            "The Sun at the Center",
            "Nearly all of the solar system's mass sits in the sun.",
            AnimationType::Scale,
            vec![element("sun", ElementKind::Shape, "☀️", 50.0, 45.0, "#F4A300")],
        ),
        step(
            "solar-2",
            2,
            "Inner Planets",
            "Mercury, Venus, Earth, and Mars orbit closest to the sun.",
            AnimationType::SlideLeft,
            vec![
                element("sun", ElementKind::Shape, "☀️", 15.0, 45.0, "#F4A300"),
                element("earth", ElementKind::Shape, "🌍", 55.0, 45.0, "#457B9D"),
                element("mars", ElementKind::Shape, "🔴", 75.0, 45.0, "#E63946"),
            ],
        ),
        step(
            "solar-3",
            3,
            "Orbits Are Ellipses",
            "Planets trace elliptical paths, moving faster when nearer the sun.",
            AnimationType::Draw,
            vec![
                element("sun", ElementKind::Shape, "☀️", 50.0, 50.0, "#F4A300"),
                element("orbit", ElementKind::Svg, "", 50.0, 50.0, "#6C757D"),
            ],
        ),
    ];

    AnimationSequence {
        id: "template-solar-system".to_string(),
        title: "Tour of the Solar System".to_string(),
        topic: "Astronomy".to_string(),
        thumbnail: None,
        description: Some("From the sun outward: planets, orbits, and scale.".to_string()),
        total_steps: 3,
        steps,
        auto_play: Some(true),
        auto_play_delay: Some(3.0),
        difficulty: Some(Difficulty::Beginner),
        tags: Some(vec!["Astronomy".to_string(), "Physics".to_string()]),
    }
}

fn projectile_motion() -> AnimationSequence {
    let mut steps = vec![
        step(
            "proj-1",
            1,
            "Launch",
            "A projectile leaves the ground at an angle with some initial speed.",
            AnimationType::SlideRight,
            vec![
                element("projectile", ElementKind::Shape, "⚽", 10.0, 80.0, "#1C1C1C"),
                element("velocity", ElementKind::Text, "v₀", 20.0, 65.0, "#457B9D"),
            ],
        ),
        step(
            "proj-2",
            2,
            "Apex",
            "Vertical velocity reaches zero at the top of the arc.",
            AnimationType::Bounce,
            vec![
                element("projectile", ElementKind::Shape, "⚽", 50.0, 20.0, "#1C1C1C"),
                element("apex-label", ElementKind::Text, "vᵧ = 0", 60.0, 12.0, "#E63946"),
            ],
        ),
        step(
            "proj-3",
            3,
            "Landing",
            "Gravity pulls the projectile back down along a parabola.",
            AnimationType::SlideDown,
            vec![
                element("projectile", ElementKind::Shape, "⚽", 90.0, 80.0, "#1C1C1C"),
                element("path", ElementKind::Svg, "", 50.0, 50.0, "#6C757D"),
            ],
        ),
    ];
    steps[1].quiz = Some(StepQuiz {
        question: "What is the vertical velocity at the apex of the arc?".to_string(),
        options: vec![
            "Maximal".to_string(),
            "Equal to the launch speed".to_string(),
            "Zero".to_string(),
        ],
        correct: 2,
    });

    AnimationSequence {
        id: "template-projectile-motion".to_string(),
        title: "Projectile Motion Basics".to_string(),
        topic: "Physics".to_string(),
        thumbnail: None,
        description: Some("Launch, apex, landing: the anatomy of a parabolic arc.".to_string()),
        total_steps: 3,
        steps,
        auto_play: Some(false),
        auto_play_delay: None,
        difficulty: Some(Difficulty::Intermediate),
        tags: Some(vec!["Physics".to_string(), "Mechanics".to_string()]),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/templates.rs"]
mod tests;
