/// Layer switcher control: named visibility flags, one per map layer, kept
/// in insertion order so callers can render them as a stable list.
#[derive(Debug, Default)]
pub struct LayerSwitcher {
    layers: Vec<Layer>,
}

#[derive(Debug)]
struct Layer {
    name: String,
    visible: bool,
}

impl LayerSwitcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a layer. Re-adding an existing name only updates its flag.
    pub fn add_layer(&mut self, name: &str, visible: bool) {
        match self.layers.iter_mut().find(|layer| layer.name == name) {
            Some(layer) => layer.visible = visible,
            None => self.layers.push(Layer {
                name: name.to_string(),
                visible,
            }),
        }
    }

    /// Returns `false` when the layer is unknown.
    pub fn set_visible(&mut self, name: &str, visible: bool) -> bool {
        match self.layers.iter_mut().find(|layer| layer.name == name) {
            Some(layer) => {
                layer.visible = visible;
                true
            }
            None => {
                log::warn!("unknown layer: {}", name);
                false
            }
        }
    }

    /// Flips a layer's visibility, returning the new state.
    pub fn toggle(&mut self, name: &str) -> Option<bool> {
        let layer = self.layers.iter_mut().find(|layer| layer.name == name)?;
        layer.visible = !layer.visible;
        Some(layer.visible)
    }

    pub fn is_visible(&self, name: &str) -> Option<bool> {
        self.layers
            .iter()
            .find(|layer| layer.name == name)
            .map(|layer| layer.visible)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.layers
            .iter()
            .map(|layer| (layer.name.as_str(), layer.visible))
    }
}
