use snakepit_config::Config;
use snakepit_core_contact_impl::handler::ContactFeatureConfig;
use snakepit_di::provider;
use snakepit_shared_impl::id::IdServiceConfig;

pub mod types;

provider! {
    /// The default provider, capable of providing all the dependencies
    pub Provider {
        ..config: ConfigProvider {
            // Shared
            IdServiceConfig,

            // Core
            ContactFeatureConfig,
        }
    }
}

impl Provider {
    pub fn new(config: ConfigProvider) -> Self {
        Self {
            _cache: Default::default(),
            config,
        }
    }
}

provider! {
    /// Reduced provider, capable of providing services that only depend on the configuration
    pub ConfigProvider {
        // Shared
        id_service_config: IdServiceConfig,

        // Core
        contact_feature_config: ContactFeatureConfig,
    }
}

impl ConfigProvider {
    pub fn new(config: &Config) -> Self {
        // Shared
        let id_service_config = IdServiceConfig {
            first_id: config.snake.first_id,
        };

        // Core
        let contact_feature_config = ContactFeatureConfig {
            log_submissions: config.contact.log_submissions,
        };

        Self {
            _cache: Default::default(),

            // Shared
            id_service_config,

            // Core
            contact_feature_config,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use snakepit_config::DEFAULT_CONFIG_PATH;
    use snakepit_core_snake_contracts::snake::SnakeService;
    use snakepit_di::Provides;
    use snakepit_models::snake::{SnakeCollection, SnakeDraft};
    use types::{ContactFeature, SnakeCrud, SnakeFeature};

    use super::*;

    fn provider() -> Provider {
        let config = snakepit_config::load(&[Path::new(DEFAULT_CONFIG_PATH)]).unwrap();
        Provider::new(ConfigProvider::new(&config))
    }

    #[test]
    fn provide_features() {
        let mut provider = provider();
        let _: ContactFeature = provider.provide();
        let _: SnakeFeature = provider.provide();
    }

    #[test]
    fn snake_services_share_id_counter() {
        // Arrange
        let mut provider = provider();
        let a: SnakeCrud = provider.provide();
        let b: SnakeCrud = provider.provide();

        let draft = SnakeDraft {
            name: "Cobra".into(),
            scientific_name: "Naja naja".into(),
            ..Default::default()
        };
        let mut snakes = SnakeCollection::new();

        // Act
        let first = a.create(&mut snakes, &draft).unwrap();
        let second = b.create(&mut snakes, &draft).unwrap();

        // Assert
        assert_eq!(*first.id, 1);
        assert_eq!(*second.id, 2);
    }
}
