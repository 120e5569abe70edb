//! Domain layer health check functionality
//! This module provides health check services for the application

use async_trait::async_trait;
use std::collections::HashMap;

/// System health status
#[derive(Debug, Clone, PartialEq)]
pub enum SystemStatus {
    /// All components are healthy
    Healthy,
    /// Some components are degraded but the system is functional
    Degraded,
    /// System is not functioning properly
    Unhealthy,
}

/// Component health status
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentStatus {
    /// Component is functioning normally
    Healthy,
    /// Component is functioning but with reduced capability
    Degraded,
    /// Component is not functioning
    Unhealthy,
}

/// Represents a health component with status and optional details
#[derive(Debug, Clone)]
pub struct HealthComponent {
    /// Status of the component
    pub status: ComponentStatus,
    /// Optional details about the component status
    pub details: Option<String>,
}

impl HealthComponent {
    /// A healthy component without details
    pub fn healthy() -> Self {
        Self {
            status: ComponentStatus::Healthy,
            details: None,
        }
    }
}

/// Represents the overall health of the system
#[derive(Debug, Clone)]
pub struct SystemHealth {
    /// Overall system status
    pub status: SystemStatus,
    /// Map of component names to their health status
    pub components: HashMap<String, HealthComponent>,
}

impl SystemHealth {
    /// Build a system health report, deriving the overall status from the components
    pub fn from_components(components: HashMap<String, HealthComponent>) -> Self {
        Self {
            status: aggregate_status(components.values()),
            components,
        }
    }
}

/// Trait for health services
#[async_trait]
pub trait HealthServiceTrait: Send + Sync + std::fmt::Debug {
    /// Get the overall system health
    async fn get_system_health(&self) -> SystemHealth;

    /// Check whether AI analysis is available.
    /// Returns false when only the heuristic fallback can be used.
    async fn check_analysis_provider(&self) -> bool;
}

/// Worst status among the components wins
pub fn aggregate_status<'a>(components: impl IntoIterator<Item = &'a HealthComponent>) -> SystemStatus {
    let mut status = SystemStatus::Healthy;
    for component in components {
        match component.status {
            ComponentStatus::Unhealthy => return SystemStatus::Unhealthy,
            ComponentStatus::Degraded => status = SystemStatus::Degraded,
            ComponentStatus::Healthy => {}
        }
    }
    status
}

/// Health component describing the AI analysis provider
pub fn analysis_provider_component(ai_available: bool) -> HealthComponent {
    if ai_available {
        HealthComponent::healthy()
    } else {
        HealthComponent {
            status: ComponentStatus::Degraded,
            details: Some("AI provider not configured, heuristic analysis only".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn component(status: ComponentStatus) -> HealthComponent {
        HealthComponent { status, details: None }
    }

    #[test]
    fn test_aggregate_status() {
        assert_eq!(aggregate_status(Vec::<HealthComponent>::new().iter()), SystemStatus::Healthy);
        assert_eq!(
            aggregate_status(&[component(ComponentStatus::Healthy), component(ComponentStatus::Degraded)]),
            SystemStatus::Degraded
        );
        assert_eq!(
            aggregate_status(&[
                component(ComponentStatus::Unhealthy),
                component(ComponentStatus::Degraded)
            ]),
            SystemStatus::Unhealthy
        );
    }

    #[test]
    fn test_analysis_provider_component() {
        assert_eq!(analysis_provider_component(true).status, ComponentStatus::Healthy);

        let degraded = analysis_provider_component(false);
        assert_eq!(degraded.status, ComponentStatus::Degraded);
        assert!(degraded.details.unwrap().contains("heuristic"));
    }

    #[test]
    fn test_system_health_from_components() {
        let mut components = HashMap::new();
        components.insert("api".to_string(), HealthComponent::healthy());
        components.insert("analysis_provider".to_string(), analysis_provider_component(false));

        let health = SystemHealth::from_components(components);
        assert_eq!(health.status, SystemStatus::Degraded);
        assert_eq!(health.components.len(), 2);
    }
}
