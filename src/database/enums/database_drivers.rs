use clap::ValueEnum;
use serde::{
    Deserialize,
    Serialize
};

#[allow(non_camel_case_types)]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum)]
pub enum DatabaseDrivers {
    #[serde(alias = "mariadb")]
    mysql,
    #[serde(alias = "postgres", alias = "postgresql")]
    pgsql,
    #[serde(alias = "sqlite")]
    sqlite3,
}
