use tenancy::model::{App, Infra, Tenant};

/// Apps `{prefix}1..={prefix}{n}`, created by `alice` at 1, 2, ... n.
pub fn app_sequence(prefix: &str, n: usize) -> Vec<App> {
    (1..=n)
        .map(|i| App::new(format!("{}{}", prefix, i), "alice", i as i64))
        .collect()
}

/// Tenant `t1` with apps `a1..a7`, the worked pagination example.
pub fn seven_app_infra() -> Infra {
    InfraBuilder::new()
        .tenant("t1", app_sequence("a", 7))
        .build()
}

#[derive(Debug, Default)]
pub struct InfraBuilder {
    infra: Infra,
}

impl InfraBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn block_traffic(mut self, block: bool) -> Self {
        self.infra.block_traffic = block;
        self
    }

    pub fn tenant(mut self, id: &str, apps: Vec<App>) -> Self {
        self.infra.tenants.push(Tenant::new(id).with_apps(apps));
        self
    }

    pub fn empty_tenant(self, id: &str) -> Self {
        self.tenant(id, Vec::new())
    }

    pub fn build(self) -> Infra {
        self.infra
    }
}
