//! Static study catalog.
//!
//! # Responsibility
//! - Map a stream to its ordered subject list.
//! - Map a subject to its ordered chapter list, with fallbacks for subjects
//!   the catalog does not name.
//! - Provide the onboarding option lists.
//!
//! # Invariants
//! - Resolution is a pure function of its inputs.
//! - Stream and subject order is the declaration order below.

const STREAM_SUBJECTS: &[(&str, &[&str])] = &[
    ("Class 6", SCHOOL_CORE),
    ("Class 7", SCHOOL_CORE),
    ("Class 8", SCHOOL_CORE),
    ("Class 9", SCHOOL_CORE),
    ("Class 10", SCHOOL_CORE),
    ("Class 11 - Science (Maths)", SCIENCE_MATHS),
    ("Class 11 - Science (Biology)", SCIENCE_BIOLOGY),
    ("Class 11 - Commerce", COMMERCE),
    ("Class 11 - Humanities", HUMANITIES),
    ("Class 12 - Science (Maths)", SCIENCE_MATHS),
    ("Class 12 - Science (Biology)", SCIENCE_BIOLOGY),
    ("Class 12 - Commerce", COMMERCE),
    ("Class 12 - Humanities", HUMANITIES),
    ("JEE (PCM)", &["Physics", "Chemistry", "Mathematics"]),
    ("NEET (PCB)", &["Physics", "Chemistry", "Biology"]),
];

const SCHOOL_CORE: &[&str] = &["Mathematics", "Science", "English", "Social Science"];
const SCIENCE_MATHS: &[&str] = &["Physics", "Chemistry", "Mathematics", "English"];
const SCIENCE_BIOLOGY: &[&str] = &["Physics", "Chemistry", "Biology", "English"];
const COMMERCE: &[&str] = &["Accountancy", "Business Studies", "Economics", "English"];
const HUMANITIES: &[&str] = &["History", "Political Science", "Geography", "English"];

const SUBJECT_CHAPTERS: &[(&str, &[&str])] = &[
    (
        "Mathematics",
        &[
            "Number System",
            "Algebra Basics",
            "Geometry Basics",
            "Mensuration",
            "Data Handling",
        ],
    ),
    (
        "Science",
        &[
            "Matter in Our Surroundings",
            "Is Matter Around Us Pure?",
            "Atoms and Molecules",
            "Motion and Measurement of Distances",
        ],
    ),
    (
        "English",
        &["Prose: Stories & Poems", "Writing Skills", "Grammar"],
    ),
    (
        "Social Science",
        &[
            "History: Ancient to Medieval",
            "Geography: Our Environment",
            "Civics: Democracy & Government",
        ],
    ),
    (
        "Physics",
        &[
            "Physical World and Measurement",
            "Kinematics",
            "Laws of Motion",
            "Work, Energy and Power",
            "System of Particles and Rotational Motion",
            "Gravitation",
            "Mechanical Properties of Solids",
            "Mechanical Properties of Fluids",
            "Thermal Properties of Matter",
            "Thermodynamics",
            "Kinetic Theory",
            "Oscillations",
            "Waves",
        ],
    ),
    (
        "Chemistry",
        &[
            "Some Basic Concepts of Chemistry",
            "Structure of Atom",
            "Classification of Elements & Periodicity",
            "Chemical Bonding",
            "States of Matter",
            "Thermodynamics (Basics)",
            "Equilibrium (Basic)",
        ],
    ),
    (
        MATHS_FALLBACK,
        &[
            "Sets and Functions",
            "Relations and Functions",
            "Trigonometric Functions",
            "Principle of Mathematical Induction",
            "Complex Numbers",
            "Linear Inequalities",
            "Permutations and Combinations",
            "Binomial Theorem",
            "Sequences and Series",
        ],
    ),
    (
        "Biology",
        &[
            "Diversity in the Living World",
            "Structural Organisation in Animals and Plants",
            "Cell Structure and Function",
            "Plant Kingdom",
            "Human Physiology (Intro)",
        ],
    ),
    (
        "Physics (12)",
        &[
            "Electrostatics",
            "Current Electricity",
            "Magnetic Effects of Current and Magnetism",
            "Electromagnetic Induction",
            "Alternating Current",
            "Electromagnetic Waves",
            "Optics",
            "Dual Nature of Matter",
            "Atoms and Nuclei",
            "Electronic Devices",
        ],
    ),
    (
        "Chemistry (12)",
        &[
            "Solid State",
            "Solutions",
            "Electrochemistry",
            "Chemical Kinetics",
            "Surface Chemistry",
            "Coordination Compounds",
            "Haloalkanes and Haloarenes",
            "Alcohols, Phenols and Ethers",
            "Aldehydes, Ketones and Carboxylic Acids",
            "Amines",
            "Biomolecules",
        ],
    ),
    (
        "Mathematics (12)",
        &[
            "Relations and Functions",
            "Inverse Trigonometric Functions",
            "Matrices and Determinants",
            "Continuity and Differentiability",
            "Application of Derivatives",
            "Integrals",
            "Differential Equations",
            "Probability",
        ],
    ),
];

/// Chapter list used for any unlisted subject whose name mentions `Math`.
const MATHS_FALLBACK: &str = "Mathematics (11)";
const PLACEHOLDER_CHAPTERS: &[&str] = &["Chapter 1", "Chapter 2"];
const DEFAULT_SUBJECTS: &[&str] = &["Mathematics", "Science"];

pub const CLASS_OPTIONS: &[&str] = &["6", "7", "8", "9", "10", "11", "12", "Dropper"];
pub const BOARD_OPTIONS: &[&str] = &["CBSE", "ICSE", "State Board", "Other"];
pub const GOAL_OPTIONS: &[&str] = &["Boards/CBSE", "IIT-JEE", "NEET", "Other"];

/// Settings-screen fallbacks for blank profile fields.
pub const DEFAULT_CLASS: &str = "11";
pub const DEFAULT_BOARD: &str = "CBSE";
pub const DEFAULT_GOAL: &str = "Boards/CBSE";

/// Every stream name, in catalog order.
pub fn streams() -> impl Iterator<Item = &'static str> {
    STREAM_SUBJECTS.iter().map(|(stream, _)| *stream)
}

/// First stream offered when a user has none saved.
pub fn default_stream() -> &'static str {
    STREAM_SUBJECTS[0].0
}

/// Subjects for an exact stream name, if the catalog knows it.
pub fn stream_subjects(stream: &str) -> Option<&'static [&'static str]> {
    lookup(STREAM_SUBJECTS, stream)
}

/// Subjects a user in `class_name` following `stream` should have.
///
/// Resolution order: exact stream, then `Class {class_name}`, then
/// Mathematics + Science.
pub fn subjects_for(class_name: &str, stream: &str) -> &'static [&'static str] {
    stream_subjects(stream)
        .or_else(|| stream_subjects(&format!("Class {class_name}")))
        .unwrap_or(DEFAULT_SUBJECTS)
}

/// Chapters seeded for `subject`.
///
/// Unlisted subjects mentioning `Math` share the `Mathematics (11)` list;
/// anything else unlisted gets a two-chapter placeholder.
pub fn chapters_for(subject: &str) -> &'static [&'static str] {
    if let Some(chapters) = lookup(SUBJECT_CHAPTERS, subject) {
        return chapters;
    }
    let fallback = if subject.contains("Math") {
        MATHS_FALLBACK
    } else if subject == "Chemistry" || subject == "Biology" {
        subject
    } else {
        return PLACEHOLDER_CHAPTERS;
    };
    lookup(SUBJECT_CHAPTERS, fallback).unwrap_or(PLACEHOLDER_CHAPTERS)
}

fn lookup(
    table: &'static [(&'static str, &'static [&'static str])],
    key: &str,
) -> Option<&'static [&'static str]> {
    table
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, values)| *values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stream_lookup_is_exact() {
        assert_eq!(
            subjects_for("11", "JEE (PCM)"),
            ["Physics", "Chemistry", "Mathematics"]
        );
        assert_eq!(stream_subjects("jee (pcm)"), None);
    }

    #[test]
    fn unknown_stream_falls_back_to_class_then_default() {
        assert_eq!(subjects_for("9", "Olympiad"), SCHOOL_CORE);
        assert_eq!(subjects_for("Dropper", "Olympiad"), ["Mathematics", "Science"]);
        assert_eq!(subjects_for("", ""), ["Mathematics", "Science"]);
    }

    #[test]
    fn math_like_subjects_share_class_eleven_list() {
        let expected = chapters_for("Mathematics (11)");
        assert_eq!(chapters_for("Applied Maths"), expected);
        assert_eq!(chapters_for("Business Mathematics"), expected);
        assert_eq!(expected.len(), 9);
    }

    #[test]
    fn listed_mathematics_keeps_its_own_chapters() {
        assert_eq!(chapters_for("Mathematics").len(), 5);
        assert_eq!(chapters_for("Mathematics (12)")[0], "Relations and Functions");
    }

    #[test]
    fn unlisted_subjects_get_placeholders() {
        assert_eq!(chapters_for("Economics"), ["Chapter 1", "Chapter 2"]);
        assert_eq!(chapters_for("Accountancy"), ["Chapter 1", "Chapter 2"]);
    }

    #[test]
    fn streams_keep_declaration_order() {
        let all: Vec<_> = streams().collect();
        assert_eq!(all.len(), 15);
        assert_eq!(all[0], default_stream());
        assert_eq!(all[14], "NEET (PCB)");
    }
}
