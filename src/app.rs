use anyhow::Result;

use crate::{config::DbConfig, db::Db};

pub(crate) struct AppContext {
    db: Db,
}

impl AppContext {
    pub(crate) fn new() -> Result<Self> {
        let config = DbConfig::from_env()?;
        Ok(Self {
            db: Db::new(config),
        })
    }

    pub(crate) fn db_mut(&mut self) -> &mut Db {
        &mut self.db
    }
}
