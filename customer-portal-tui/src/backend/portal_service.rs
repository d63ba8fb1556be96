//! 门户服务
//!
//! 执行 Update 层排队的 Command：每条命令在 tokio 运行时上起一个任务，
//! 任务结束后把结果包成 BackendMessage 经 mpsc 通道送回主循环。

use std::sync::Arc;

use customer_portal_core::hooks::{self, Mutation, StoreHook};
use customer_portal_core::PortalApi;
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;

use super::config_service::{AppConfig, ConfigService};
use crate::message::{BackendMessage, Command};

/// 门户服务
///
/// 持有 API 客户端与配置服务，本身不持有任何 UI 状态。
pub struct PortalService {
    api: Arc<dyn PortalApi>,
    config: Arc<dyn ConfigService>,
    handle: Handle,
    tx: UnboundedSender<BackendMessage>,
}

impl PortalService {
    pub fn new(
        api: Arc<dyn PortalApi>,
        config: Arc<dyn ConfigService>,
        handle: Handle,
        tx: UnboundedSender<BackendMessage>,
    ) -> Self {
        Self {
            api,
            config,
            handle,
            tx,
        }
    }

    /// 执行一条命令（立即返回，结果稍后通过通道送达）
    pub fn execute(&self, command: Command) {
        log::debug!("Executing {command:?}");
        match command {
            Command::Load(hook) => self.load(hook),
            Command::LoadBilling => self.load_billing(),
            Command::LoadDnsRecords(domain_id) => self.load_dns_records(domain_id),
            Command::Mutate(mutation) => self.mutate(mutation),
            Command::SaveConfig(config) => self.save_config(config),
        }
    }

    /// 依次执行多条命令
    pub fn execute_all(&self, commands: Vec<Command>) {
        for command in commands {
            self.execute(command);
        }
    }

    // ========== 各类命令 ==========

    fn load(&self, hook: StoreHook) {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        self.handle.spawn(async move {
            let outcome = hook.fetch(api).await;
            send(&tx, BackendMessage::Loaded(outcome));
        });
    }

    fn load_billing(&self) {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        self.handle.spawn(async move {
            let result = hooks::fetch_billing(api).await;
            send(&tx, BackendMessage::Billing(result));
        });
    }

    fn load_dns_records(&self, domain_id: String) {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        self.handle.spawn(async move {
            let result = hooks::fetch_dns_records(api, domain_id.clone()).await;
            send(&tx, BackendMessage::DnsRecords { domain_id, result });
        });
    }

    fn mutate(&self, mutation: Mutation) {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        self.handle.spawn(async move {
            let outcome = mutation.execute(api).await;
            send(&tx, BackendMessage::Mutated(outcome));
        });
    }

    fn save_config(&self, config: AppConfig) {
        let service = Arc::clone(&self.config);
        let tx = self.tx.clone();
        self.handle.spawn_blocking(move || {
            let result = service.save(&config).map_err(|e| {
                log::error!("Saving config failed: {e:#}");
                e.to_string()
            });
            send(&tx, BackendMessage::ConfigSaved(result));
        });
    }
}

/// 主循环已退出时通道关闭，丢弃结果即可
fn send(tx: &UnboundedSender<BackendMessage>, message: BackendMessage) {
    if tx.send(message).is_err() {
        log::debug!("Backend result dropped, main loop has exited");
    }
}
