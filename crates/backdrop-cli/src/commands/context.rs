use crate::errors::CommandError;
use crate::generator::RegistryGenerator;
use crate::logger;
use crate::GlobalOpts;
use backdrop_config::{Config, ProjectLayout};
use std::path::PathBuf;

/// Config and directory layout shared by the project commands
pub struct ProjectContext {
    pub config_path: PathBuf,
    pub config: Config,
    pub layout: ProjectLayout,
}

impl ProjectContext {
    pub fn load(opts: &GlobalOpts) -> Result<Self, CommandError> {
        let config_path = Config::path(&opts.root, opts.config.as_deref());
        logger::debug(&format!("Reading config from: {}", config_path.display()));

        let config = Config::load_from(&config_path)?;
        let layout = ProjectLayout::resolve(&opts.root, &config)?;

        logger::debug(&format!(
            "Components: {}, output: {}",
            layout.components_dir.display(),
            layout.output_dir.display()
        ));

        Ok(ProjectContext {
            config_path,
            config,
            layout,
        })
    }

    pub fn generator(&self) -> RegistryGenerator {
        RegistryGenerator::new(self.layout.clone(), &self.config)
    }
}
