// Seam to the external script-delivery collaborator.
// - `ScriptBridge` is the two-method contract the shell consumes.
// - `LoopbackBridge` is the in-process stand-in used when no real bridge
//   is linked; it accepts everything within a payload cap.
use thiserror::Error;

/// Largest script the loopback delivery path accepts.
const LOOPBACK_PAYLOAD_CAP: usize = 512 * 1024;

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("no target process found")]
    TargetNotFound,
    #[error("not attached to a target")]
    NotAttached,
    #[error("target rejected the script: {0}")]
    Rejected(String),
}

/// Contract of the external attach/deliver collaborator. Both calls are
/// synchronous; the shell never retries on its own.
pub trait ScriptBridge {
    fn attach(&mut self) -> Result<(), BridgeError>;
    fn send_script(&mut self, script: &str) -> Result<(), BridgeError>;
}

/// Accepts every attach and counts deliveries instead of performing them.
#[derive(Debug, Default)]
pub struct LoopbackBridge {
    attached: bool,
    delivered: usize,
}

impl LoopbackBridge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delivered(&self) -> usize {
        self.delivered
    }
}

impl ScriptBridge for LoopbackBridge {
    fn attach(&mut self) -> Result<(), BridgeError> {
        self.attached = true;
        Ok(())
    }

    fn send_script(&mut self, script: &str) -> Result<(), BridgeError> {
        if !self.attached {
            return Err(BridgeError::NotAttached);
        }
        if script.len() > LOOPBACK_PAYLOAD_CAP {
            return Err(BridgeError::Rejected(format!(
                "script is {} bytes, payload cap is {LOOPBACK_PAYLOAD_CAP}",
                script.len()
            )));
        }

        self.delivered += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loopback_counts_deliveries_after_attach() {
        let mut bridge = LoopbackBridge::new();
        bridge.attach().unwrap();
        bridge.send_script("print(1)").unwrap();
        bridge.send_script("print(2)").unwrap();
        assert_eq!(bridge.delivered(), 2);
    }

    #[test]
    fn loopback_rejects_send_before_attach() {
        let mut bridge = LoopbackBridge::new();
        let err = bridge.send_script("print(1)").unwrap_err();
        assert!(matches!(err, BridgeError::NotAttached));
        assert_eq!(bridge.delivered(), 0);
    }

    #[test]
    fn error_messages_are_user_facing() {
        assert_eq!(
            BridgeError::TargetNotFound.to_string(),
            "no target process found"
        );
        assert_eq!(
            BridgeError::NotAttached.to_string(),
            "not attached to a target"
        );
    }

    #[test]
    fn loopback_rejects_oversized_scripts() {
        let mut bridge = LoopbackBridge::new();
        bridge.attach().unwrap();
        let big = "x".repeat(LOOPBACK_PAYLOAD_CAP + 1);
        let err = bridge.send_script(&big).unwrap_err();
        assert!(err.to_string().contains("payload cap"));
        assert_eq!(bridge.delivered(), 0);
    }
}
