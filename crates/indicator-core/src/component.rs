//! Tab indicator component
//!
//! Chooses the foundation for a root element and forwards the public
//! surface (`activate`, `deactivate`, `get_client_rect`) to it unchanged.

use indicator_foundation::{
    BarFoundation, ClientRect, Foundation, IconFoundation, IndicatorBounds, IndicatorState,
};
use indicator_surface::Element;

use crate::adapter::ElementAdapter;
use crate::config::IndicatorConfig;
use crate::error::CoreError;
use crate::variant::IndicatorVariant;
use crate::Result;

pub struct TabIndicator {
    root: Element,
    /// Bound once at construction, never swapped
    foundation: Box<dyn Foundation>,
    config: IndicatorConfig,
}

impl TabIndicator {
    /// Attach to `root`, choosing the foundation from its variant marker.
    ///
    /// Fails with [`CoreError::Configuration`] when the root carries neither
    /// the bar nor the icon marker.
    pub fn attach_to(root: Element) -> Result<Self> {
        Self::attach_to_with_config(root, IndicatorConfig::default())
    }

    pub fn attach_to_with_config(root: Element, config: IndicatorConfig) -> Result<Self> {
        config.validate()?;
        Self::build(root, None, config)
    }

    /// Construct around `root`, optionally with a prebuilt foundation.
    ///
    /// Without one the default foundation is chosen exactly as
    /// [`attach_to`](Self::attach_to) does.
    pub fn new(root: Element, foundation: Option<Box<dyn Foundation>>) -> Result<Self> {
        Self::new_with_config(root, foundation, IndicatorConfig::default())
    }

    /// [`new`](Self::new) with a custom class prefix or transition event.
    pub fn new_with_config(
        root: Element,
        foundation: Option<Box<dyn Foundation>>,
        config: IndicatorConfig,
    ) -> Result<Self> {
        config.validate()?;
        Self::build(root, foundation, config)
    }

    fn build(
        root: Element,
        foundation: Option<Box<dyn Foundation>>,
        config: IndicatorConfig,
    ) -> Result<Self> {
        let foundation = match foundation {
            Some(foundation) => foundation,
            None => Self::foundation_for(&root, &config)?,
        };

        let mut indicator = Self {
            root,
            foundation,
            config,
        };
        indicator.foundation.init()?;

        tracing::info!(
            variant = indicator.foundation.variant_name(),
            classes = %indicator.root.class_name(),
            "Attached tab indicator"
        );

        Ok(indicator)
    }

    /// Build the foundation this root would get by default, bound to a fresh
    /// adapter over the root. The returned foundation is not initialized.
    pub fn default_foundation(&self) -> Result<Box<dyn Foundation>> {
        Self::foundation_for(&self.root, &self.config)
    }

    fn foundation_for(root: &Element, config: &IndicatorConfig) -> Result<Box<dyn Foundation>> {
        let classes = config.classes();
        let variant = IndicatorVariant::detect(root, &classes).ok_or_else(|| {
            CoreError::Configuration(format!(
                "cannot determine indicator variant: root needs {:?} or {:?}",
                IndicatorVariant::Bar.marker_class(&classes),
                IndicatorVariant::Icon.marker_class(&classes)
            ))
        })?;

        let adapter = Box::new(ElementAdapter::new(root.clone()));
        let foundation: Box<dyn Foundation> = match variant {
            IndicatorVariant::Bar => Box::new(
                BarFoundation::new(adapter, classes)
                    .with_transition_event(config.transition_event.clone()),
            ),
            IndicatorVariant::Icon => Box::new(IconFoundation::new(adapter, classes)),
        };
        Ok(foundation)
    }

    pub fn activate(&mut self, previous: Option<IndicatorBounds>) -> Result<()> {
        Ok(self.foundation.activate(previous)?)
    }

    pub fn deactivate(&mut self) -> Result<()> {
        Ok(self.foundation.deactivate()?)
    }

    pub fn get_client_rect(&self) -> Result<ClientRect> {
        Ok(self.foundation.get_client_rect()?)
    }

    pub fn state(&self) -> IndicatorState {
        self.foundation.state()
    }

    pub fn is_active(&self) -> bool {
        self.foundation.state().is_active()
    }

    pub fn variant_name(&self) -> &'static str {
        self.foundation.variant_name()
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    /// Release everything the foundation registered on the root
    pub fn destroy(&mut self) -> Result<()> {
        self.foundation.destroy()?;
        tracing::info!(variant = self.foundation.variant_name(), "Destroyed tab indicator");
        Ok(())
    }
}

impl Drop for TabIndicator {
    fn drop(&mut self) {
        if let Err(err) = self.foundation.destroy() {
            tracing::warn!(
                variant = self.foundation.variant_name(),
                error = %err,
                "Failed to release tab indicator"
            );
        }
    }
}

impl std::fmt::Debug for TabIndicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TabIndicator")
            .field("root", &self.root)
            .field("variant", &self.foundation.variant_name())
            .field("state", &self.foundation.state())
            .finish()
    }
}
