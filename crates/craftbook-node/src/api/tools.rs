//! Tool manifest for agent registration.

use axum::Json;
use serde::Serialize;

/// One parameter of a tool.
#[derive(Debug, Serialize)]
pub struct ToolParam {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub description: &'static str,
}

/// One callable tool.
#[derive(Debug, Serialize)]
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub method: &'static str,
    pub path: &'static str,
    pub params: Vec<ToolParam>,
}

fn param(name: &'static str, kind: &'static str, description: &'static str) -> ToolParam {
    ToolParam {
        name,
        kind,
        description,
    }
}

/// All tools exposed by this node.
pub fn manifest() -> Vec<ToolSpec> {
    vec![
        ToolSpec {
            name: "list_craft_items",
            description: "List all available craft items with their basic information",
            method: "GET",
            path: "/api/v1/crafts",
            params: vec![],
        },
        ToolSpec {
            name: "get_craft_details",
            description: "Get materials, instructions and tips for one craft",
            method: "GET",
            path: "/api/v1/crafts/:id",
            params: vec![param("id", "string", "Craft id, e.g. 'paper_airplane'")],
        },
        ToolSpec {
            name: "search_crafts_by_category",
            description: "Find crafts in a category (case-insensitive exact match)",
            method: "GET",
            path: "/api/v1/crafts/category/:category",
            params: vec![param(
                "category",
                "string",
                "Category, e.g. 'paper_crafts', 'origami', 'jewelry'",
            )],
        },
        ToolSpec {
            name: "search_crafts_by_difficulty",
            description: "Find crafts at a difficulty level",
            method: "GET",
            path: "/api/v1/crafts/difficulty/:difficulty",
            params: vec![param("difficulty", "string", "One of 'easy', 'medium', 'hard'")],
        },
        ToolSpec {
            name: "search_crafts_by_materials",
            description: "Find crafts that can be made using only the listed materials",
            method: "POST",
            path: "/api/v1/crafts/materials",
            params: vec![param("materials", "string[]", "Materials you have available")],
        },
        ToolSpec {
            name: "get_random_craft",
            description: "Get a random craft suggestion for inspiration",
            method: "GET",
            path: "/api/v1/crafts/random",
            params: vec![],
        },
        ToolSpec {
            name: "estimate_craft_time",
            description: "Estimate total time needed for several crafts",
            method: "POST",
            path: "/api/v1/estimate",
            params: vec![param("ids", "string[]", "Craft ids; repeats are counted")],
        },
    ]
}

/// Tool manifest endpoint.
pub async fn list_tools() -> Json<Vec<ToolSpec>> {
    Json(manifest())
}
