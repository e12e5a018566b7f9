//! DOM presentation adapter
//!
//! Paints [`Snapshot`]s onto the page and reads scene geometry back. The sim
//! never touches the DOM; this is the only place that does.

use std::collections::HashMap;

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Node, Window};

use super::{parse_px, px};
use crate::error::InitError;
use crate::sim::{GameEvent, PlayerBody, Rect, Snapshot, World};

const PLAYER_ID: &str = "player";
const FLOOR_ID: &str = "floor";

/// Live DOM handles for everything the game draws
pub struct DomView {
    document: Document,
    player: HtmlElement,
    floor: Element,
    score: HtmlElement,
    collectibles: HashMap<u32, HtmlElement>,
    shown_score: Option<u64>,
}

impl DomView {
    /// Find the player and floor elements and add the score panel
    pub fn attach(document: &Document) -> Result<Self, InitError> {
        let player = document
            .get_element_by_id(PLAYER_ID)
            .ok_or(InitError::MissingElement(PLAYER_ID))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| InitError::Dom("#player is not an HTML element".into()))?;
        let floor = document
            .get_element_by_id(FLOOR_ID)
            .ok_or(InitError::MissingElement(FLOOR_ID))?;
        let score = create_score_panel(document)?;

        Ok(Self {
            document: document.clone(),
            player,
            floor,
            score,
            collectibles: HashMap::new(),
            shown_score: None,
        })
    }

    /// Player body from the element's inline `left`/`top` and rendered size
    pub fn initial_player(&self) -> PlayerBody {
        let style = self.player.style();
        let x = parse_px(&style.get_property_value("left").unwrap_or_default());
        let y = parse_px(&style.get_property_value("top").unwrap_or_default());
        let rect = self.player.get_bounding_client_rect();
        PlayerBody::new(
            Vec2::new(x, y),
            Vec2::new(rect.width() as f32, rect.height() as f32),
        )
    }

    /// Current floor rect and viewport width
    pub fn world(&self, window: &Window) -> World {
        let r = self.floor.get_bounding_client_rect();
        let viewport_width = window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or(0.0) as f32;
        World {
            floor: Rect::new(
                r.left() as f32,
                r.top() as f32,
                r.width() as f32,
                r.height() as f32,
            ),
            viewport_width,
        }
    }

    /// Collectibles whose nodes something else took out of the document
    pub fn removed_collectibles(&self) -> Vec<u32> {
        let Some(body) = self.document.body() else {
            return self.collectibles.keys().copied().collect();
        };
        self.collectibles
            .iter()
            .filter(|(_, el)| {
                let node: &Node = el;
                !body.contains(Some(node))
            })
            .map(|(id, _)| *id)
            .collect()
    }

    /// Apply one frame's events and snapshot. Returns the ids of spawned
    /// collectibles that could not be drawn; the caller should despawn them.
    pub fn apply(&mut self, events: &[GameEvent], snapshot: &Snapshot) -> Vec<u32> {
        let mut failed = Vec::new();
        for event in events {
            match *event {
                GameEvent::Spawned { id } => {
                    let Some(view) = snapshot.collectibles.iter().find(|c| c.id == id) else {
                        continue;
                    };
                    match self.create_collectible(&view.rect) {
                        Ok(el) => {
                            self.collectibles.insert(id, el);
                        }
                        Err(e) => {
                            log::warn!("Failed to create collectible {}: {}", id, e);
                            failed.push(id);
                        }
                    }
                }
                GameEvent::Collected { id } | GameEvent::Reconciled { id } => {
                    if let Some(el) = self.collectibles.remove(&id) {
                        el.remove();
                    }
                }
                GameEvent::Jumped | GameEvent::Landed => {}
            }
        }

        let style = self.player.style();
        let _ = style.set_property("left", &px(snapshot.player.left));
        let _ = style.set_property("top", &px(snapshot.player.top));
        let _ = self
            .player
            .class_list()
            .toggle_with_force("jumping", snapshot.jumping);

        if self.shown_score != Some(snapshot.score) {
            self.score
                .set_text_content(Some(&format!("Score: {}", snapshot.score)));
            self.shown_score = Some(snapshot.score);
        }
        failed
    }

    fn create_collectible(&self, rect: &Rect) -> Result<HtmlElement, InitError> {
        let el = create_div(&self.document)?;
        el.set_class_name("collectible");
        set_styles(
            &el,
            &[
                ("position", "absolute"),
                ("width", px(rect.width).as_str()),
                ("height", px(rect.height).as_str()),
                ("left", px(rect.left).as_str()),
                ("top", px(rect.top).as_str()),
                ("background-image", "url(\"jerry.png\")"),
                ("background-size", "cover"),
                ("border-radius", "4px"),
            ],
        )?;
        append_to_body(&self.document, &el)?;
        Ok(el)
    }
}

fn create_score_panel(document: &Document) -> Result<HtmlElement, InitError> {
    let el = create_div(document)?;
    set_styles(
        &el,
        &[
            ("position", "fixed"),
            ("left", "10px"),
            ("top", "10px"),
            ("padding", "6px 10px"),
            ("background", "rgba(0,0,0,0.5)"),
            ("color", "white"),
            ("font-family", "monospace"),
            ("z-index", "9999"),
        ],
    )?;
    el.set_text_content(Some("Score: 0"));
    append_to_body(document, &el)?;
    Ok(el)
}

fn create_div(document: &Document) -> Result<HtmlElement, InitError> {
    document
        .create_element("div")
        .map_err(|e| InitError::Dom(format!("create_element failed: {:?}", e)))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| InitError::Dom("div is not an HTML element".into()))
}

fn set_styles(el: &HtmlElement, props: &[(&str, &str)]) -> Result<(), InitError> {
    let style = el.style();
    for (name, value) in props {
        style
            .set_property(name, value)
            .map_err(|e| InitError::Dom(format!("set {} failed: {:?}", name, e)))?;
    }
    Ok(())
}

fn append_to_body(document: &Document, el: &HtmlElement) -> Result<(), InitError> {
    let body = document
        .body()
        .ok_or_else(|| InitError::Dom("document has no body".into()))?;
    body.append_child(el)
        .map_err(|e| InitError::Dom(format!("append_child failed: {:?}", e)))?;
    Ok(())
}
