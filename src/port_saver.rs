use rocket::fairing::{Info, Kind};
use rocket::{Orbit, Rocket};
use tokio::sync::watch;

/// A fairing that publishes the bound port once Rocket lifts off, and the
/// handle that waits for it. Lets tests bind to port 0.
pub fn create_pair() -> (PortSaver, Port) {
    let (sender, receiver) = watch::channel(None);
    (PortSaver { sender }, Port { receiver })
}

pub struct Port {
    receiver: watch::Receiver<Option<u16>>,
}

#[derive(thiserror::Error, Debug)]
#[error("The server stopped before reporting its port")]
pub struct PortUnavailable;

impl Port {
    pub async fn get(&mut self) -> Result<u16, PortUnavailable> {
        loop {
            if let Some(port) = *self.receiver.borrow() {
                return Ok(port);
            }
            self.receiver
                .changed()
                .await
                .map_err(|_| PortUnavailable)?;
        }
    }
}

pub struct PortSaver {
    sender: watch::Sender<Option<u16>>,
}

#[rocket::async_trait]
impl rocket::fairing::Fairing for PortSaver {
    fn info(&self) -> Info {
        Info {
            name: "Port Saver",
            kind: Kind::Liftoff,
        }
    }

    async fn on_liftoff(&self, rocket: &Rocket<Orbit>) {
        let port = rocket.config().port;
        tracing::info!(port, "Server is listening");
        if self.sender.send(Some(port)).is_err() {
            tracing::debug!("Nobody is waiting for the bound port");
        }
    }
}
