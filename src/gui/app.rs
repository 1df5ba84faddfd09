//! Main Iced application

use std::sync::mpsc::{Receiver, TryRecvError};
use std::sync::Arc;
use std::time::{Duration, Instant};

use iced::{Element, Subscription, Task, Theme};
use tokio::sync::Mutex;

use crate::agent::HttpWalletAgent;
use crate::config::Config;
use crate::gui::message::Message;
use crate::gui::views;
use crate::horizon::HorizonClient;
use crate::session::{SessionManager, WalletSession};
use crate::storage::SessionStore;

/// Main application struct
pub struct CyloApp {
    // Latest session snapshot, as delivered by the container
    session: WalletSession,
    lookup_address: String,
    manager: Arc<Mutex<SessionManager>>,
    // Session snapshot feed, drained by the subscription
    events: Arc<std::sync::Mutex<Receiver<WalletSession>>>,
    refresh_interval: Duration,
    // Long-lived Tokio runtime for wallet operations
    tokio_runtime: tokio::runtime::Runtime,
}

impl CyloApp {
    pub fn new(config: Config) -> (Self, Task<Message>) {
        let tokio_runtime =
            tokio::runtime::Runtime::new().expect("Failed to create Tokio runtime");

        let agent = HttpWalletAgent::new(&config.agent_url);
        let ledger = match config.horizon_url {
            Some(ref url) => HorizonClient::pinned(url.clone()),
            None => HorizonClient::default(),
        };
        let store = SessionStore::new(&config.data_dir);

        let mut manager = SessionManager::new(Box::new(agent), Box::new(ledger), store);
        let events = manager.subscribe();
        let manager = Arc::new(Mutex::new(manager));

        // Restore any stored session on startup
        let restore_manager = manager.clone();
        let rt_handle = tokio_runtime.handle().clone();
        let restore = Task::perform(
            async move {
                rt_handle
                    .spawn(async move {
                        restore_manager.lock().await.restore().await;
                    })
                    .await
                    .unwrap()
            },
            |_| Message::TaskDone,
        );

        (
            Self {
                session: WalletSession::default(),
                lookup_address: String::new(),
                manager,
                events: Arc::new(std::sync::Mutex::new(events)),
                refresh_interval: Duration::from_secs(config.refresh_interval_secs.max(1)),
                tokio_runtime,
            },
            restore,
        )
    }

    pub fn title(&self) -> String {
        String::from("AgroCylo Wallet")
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn view(&self) -> Element<Message> {
        views::home::view(&self.session, &self.lookup_address)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ConnectPressed => self.spawn(|manager| async move {
                manager.lock().await.connect().await;
            }),

            Message::DisconnectPressed => self.spawn(|manager| async move {
                manager.lock().await.disconnect();
            }),

            Message::RefreshTick => self.spawn(|manager| async move {
                manager.lock().await.refresh_balance(None).await;
            }),

            Message::LookupAddressChanged(value) => {
                self.lookup_address = value;
                Task::none()
            }

            Message::LookupPressed => {
                let address = self.lookup_address.trim().to_string();
                if address.is_empty() {
                    return Task::none();
                }
                self.spawn(move |manager| async move {
                    manager
                        .lock()
                        .await
                        .refresh_balance(Some(address.as_str()))
                        .await;
                })
            }

            Message::SessionChanged(snapshot) => {
                self.session = snapshot;
                Task::none()
            }

            Message::TaskDone => Task::none(),
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let events = self.event_feed();
        if self.session.connected {
            Subscription::batch([events, self.balance_poller()])
        } else {
            events
        }
    }

    // Run a session operation on the long-lived runtime
    fn spawn<F, Fut>(&self, operation: F) -> Task<Message>
    where
        F: FnOnce(Arc<Mutex<SessionManager>>) -> Fut + Send + 'static,
        Fut: std::future::Future<Output = ()> + Send + 'static,
    {
        let manager = self.manager.clone();
        let rt_handle = self.tokio_runtime.handle().clone();
        Task::perform(
            async move { rt_handle.spawn(operation(manager)).await.unwrap() },
            |_| Message::TaskDone,
        )
    }

    // Drain session snapshots pushed by the container
    fn event_feed(&self) -> Subscription<Message> {
        let events = self.events.clone();
        Subscription::run_with_id(
            "session_events",
            iced::futures::stream::unfold(events, |events| async move {
                loop {
                    let polled = events
                        .lock()
                        .expect("Session event feed poisoned")
                        .try_recv();
                    match polled {
                        Ok(snapshot) => {
                            return Some((Message::SessionChanged(snapshot), events));
                        }
                        Err(TryRecvError::Empty) => {
                            async_std::task::sleep(Duration::from_millis(100)).await;
                        }
                        Err(TryRecvError::Disconnected) => return None,
                    }
                }
            }),
        )
    }

    // Periodic balance refresh while connected
    fn balance_poller(&self) -> Subscription<Message> {
        let interval = self.refresh_interval;
        Subscription::run_with_id(
            "balance_poller",
            iced::futures::stream::unfold(Instant::now(), move |last_tick| async move {
                let elapsed = last_tick.elapsed();
                if elapsed < interval {
                    // Sleep using async-std which is runtime-agnostic
                    async_std::task::sleep(interval - elapsed).await;
                }
                Some((Message::RefreshTick, Instant::now()))
            }),
        )
    }
}
