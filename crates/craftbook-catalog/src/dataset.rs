//! Built-in craft dataset.

use craftbook_core::{CraftItem, Difficulty, Result};

/// The literal sample dataset, in catalog order.
pub fn sample_items() -> Result<Vec<CraftItem>> {
    Ok(vec![
        paper_airplane()?,
        origami_crane()?,
        friendship_bracelet()?,
        painted_rock()?,
        macrame_plant_hanger()?,
    ])
}

fn paper_airplane() -> Result<CraftItem> {
    CraftItem::builder()
        .id("paper_airplane")
        .name("Paper Airplane")
        .description("A simple flying paper craft perfect for beginners")
        .category("paper_crafts")
        .difficulty(Difficulty::Easy)
        .material("paper")
        .minutes(5)
        .steps([
            "Take an 8.5 x 11 inch piece of paper",
            "Fold the paper in half lengthwise, then unfold",
            "Fold the top corners down to the center crease",
            "Fold the angled edges down to the center crease again",
            "Fold the plane in half along the center crease",
            "Create wings by folding each side down to align with the bottom",
            "Your paper airplane is ready to fly!",
        ])
        .tips([
            "Use crisp folds for better flight performance",
            "Make sure both wings are even for straight flight",
            "Throw with a firm, level motion",
        ])
        .build()
}

fn origami_crane() -> Result<CraftItem> {
    CraftItem::builder()
        .id("origami_crane")
        .name("Origami Crane")
        .description("Traditional Japanese paper folding creating an elegant crane")
        .category("origami")
        .difficulty(Difficulty::Medium)
        .material("origami paper")
        .minutes_range(15, 20)
        .steps([
            "Start with a square piece of paper, colored side down",
            "Fold diagonally both ways and unfold",
            "Fold horizontally and vertically, then unfold",
            "Bring the three corners down to the bottom corner using creases as guides",
            "Fold the top flaps into the center, repeat on back",
            "Fold the top triangle down, repeat on back",
            "Pull the sides apart gently and flatten to create a diamond",
            "Fold the top points down to create the head and tail",
            "Pull the wings apart gently while holding the body",
        ])
        .tips([
            "Use proper origami paper for best results",
            "Make sharp, precise creases",
            "Be patient - it takes practice to master",
        ])
        .build()
}

fn friendship_bracelet() -> Result<CraftItem> {
    CraftItem::builder()
        .id("friendship_bracelet")
        .name("Friendship Bracelet")
        .description("Colorful woven bracelet made with embroidery thread")
        .category("jewelry")
        .difficulty(Difficulty::Medium)
        .materials(["embroidery thread", "scissors", "tape"])
        .minutes_range(30, 45)
        .steps([
            "Cut 4 strands of thread, each about 24 inches long",
            "Tie all strands together with a knot, leaving 2 inches of tail",
            "Tape the knot to a flat surface",
            "Separate strands into pairs (A, B, C, D from left to right)",
            "Take strand A over and under strand B, then pull tight",
            "Repeat the knot with strand A over strand B",
            "Move to strand C, repeat the double knot process",
            "Continue pattern until bracelet is desired length",
            "Tie off with a secure knot",
        ])
        .tips([
            "Keep tension consistent for even knots",
            "Use a clipboard to hold your work steady",
            "Choose colors that complement each other",
        ])
        .build()
}

fn painted_rock() -> Result<CraftItem> {
    CraftItem::builder()
        .id("painted_rock")
        .name("Painted Rock")
        .description("Decorative rock painted with creative designs")
        .category("art")
        .difficulty(Difficulty::Easy)
        .materials(["smooth rock", "acrylic paint", "paintbrush", "sealant"])
        // Includes drying time.
        .minutes_range(60, 120)
        .steps([
            "Find a smooth, clean rock",
            "Wash and dry the rock thoroughly",
            "Apply a base coat of paint if desired, let dry",
            "Sketch your design lightly with pencil",
            "Paint your design with acrylic paints",
            "Allow each color to dry before adding details",
            "Apply a clear sealant to protect the paint",
            "Let dry completely before handling",
        ])
        .tips([
            "Prime the rock with white paint for brighter colors",
            "Use small brushes for detailed work",
            "Work in thin layers to avoid paint drips",
        ])
        .build()
}

fn macrame_plant_hanger() -> Result<CraftItem> {
    CraftItem::builder()
        .id("macrame_plant_hanger")
        .name("Macrame Plant Hanger")
        .description("Elegant plant hanger made with knotted cord")
        .category("home_decor")
        .difficulty(Difficulty::Hard)
        .materials(["macrame cord", "metal ring", "scissors", "measuring tape"])
        .minutes_range(120, 180)
        .steps([
            "Cut 8 cords, each 3 feet long",
            "Fold all cords in half and attach to metal ring with lark's head knots",
            "Measure 6 inches down and tie square knots with groups of 4 cords",
            "Measure 4 inches down and tie another round of square knots",
            "Separate each group of 4 into 2 groups of 2",
            "Take 2 cords from adjacent groups and tie together 4 inches down",
            "Repeat around to create the basket shape",
            "Measure 8 inches down and tie all cords together with a large knot",
            "Trim excess cord to desired length",
        ])
        .tips([
            "Keep cord lengths consistent",
            "Practice basic macrame knots before starting",
            "Choose a pot that fits snugly in the hanger",
        ])
        .build()
}
