use crate::{Clipboard, ClipboardError, CommandClipboard, Osc52Clipboard};

/// Ordered list of clipboard mechanisms, tried until one succeeds
pub struct ClipboardChain {
    providers: Vec<Box<dyn Clipboard>>,
}

impl ClipboardChain {
    pub fn new(providers: Vec<Box<dyn Clipboard>>) -> Self {
        ClipboardChain { providers }
    }

    /// Use the system clipboard tool if one is installed, then OSC 52
    pub fn detect() -> Self {
        let mut providers: Vec<Box<dyn Clipboard>> = Vec::new();

        match CommandClipboard::detect() {
            Some(tool) => providers.push(Box::new(tool)),
            None => logging::debug("No system clipboard tool found"),
        }

        let osc52 = Osc52Clipboard::stdout();
        if osc52.is_available() {
            providers.push(Box::new(osc52));
        }

        ClipboardChain::new(providers)
    }

    /// Names of the mechanisms that will be tried, in order
    pub fn provider_names(&self) -> Vec<&str> {
        self.providers
            .iter()
            .filter(|p| p.is_available())
            .map(|p| p.name())
            .collect()
    }

    /// Copy `text`, returning the name of the mechanism that took it
    pub async fn copy(&self, text: &str) -> Result<&str, ClipboardError> {
        for provider in self.providers.iter().filter(|p| p.is_available()) {
            match provider.write_text(text).await {
                Ok(()) => {
                    logging::info(&format!("Copied address using {}", provider.name()));
                    return Ok(provider.name());
                }
                Err(e) => {
                    logging::warning(&format!(
                        "Failed to copy address with {}: {}",
                        provider.name(),
                        e
                    ));
                }
            }
        }

        logging::error("Failed to copy address: no clipboard mechanism succeeded");
        Err(ClipboardError::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    struct RecordingClipboard {
        name: &'static str,
        available: bool,
        fail: bool,
        copied: Arc<Mutex<Vec<String>>>,
    }

    impl RecordingClipboard {
        fn boxed(
            name: &'static str,
            available: bool,
            fail: bool,
        ) -> (Box<dyn Clipboard>, Arc<Mutex<Vec<String>>>) {
            let copied = Arc::new(Mutex::new(Vec::new()));
            let clipboard = RecordingClipboard {
                name,
                available,
                fail,
                copied: copied.clone(),
            };
            (Box::new(clipboard), copied)
        }
    }

    #[async_trait]
    impl Clipboard for RecordingClipboard {
        fn name(&self) -> &str {
            self.name
        }

        fn is_available(&self) -> bool {
            self.available
        }

        async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
            if self.fail {
                return Err(ClipboardError::CommandFailed {
                    tool: self.name.to_string(),
                    status: "exit status: 1".to_string(),
                });
            }
            self.copied.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_primary_is_used_first() {
        let (primary, primary_log) = RecordingClipboard::boxed("primary", true, false);
        let (fallback, fallback_log) = RecordingClipboard::boxed("fallback", true, false);
        let chain = ClipboardChain::new(vec![primary, fallback]);

        assert_eq!(chain.copy("addr").await.unwrap(), "primary");
        assert_eq!(*primary_log.lock().unwrap(), vec!["addr"]);
        assert!(fallback_log.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_falls_back_when_primary_fails() {
        let (primary, _) = RecordingClipboard::boxed("primary", true, true);
        let (fallback, fallback_log) = RecordingClipboard::boxed("fallback", true, false);
        let chain = ClipboardChain::new(vec![primary, fallback]);

        assert_eq!(chain.copy("addr").await.unwrap(), "fallback");
        assert_eq!(*fallback_log.lock().unwrap(), vec!["addr"]);
    }

    #[tokio::test]
    async fn test_unavailable_providers_are_skipped() {
        let (primary, primary_log) = RecordingClipboard::boxed("primary", false, false);
        let (fallback, _) = RecordingClipboard::boxed("fallback", true, false);
        let chain = ClipboardChain::new(vec![primary, fallback]);

        assert_eq!(chain.provider_names(), vec!["fallback"]);
        assert_eq!(chain.copy("addr").await.unwrap(), "fallback");
        assert!(primary_log.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_all_failures_report_unavailable() {
        let (primary, _) = RecordingClipboard::boxed("primary", true, true);
        let (fallback, _) = RecordingClipboard::boxed("fallback", true, true);
        let chain = ClipboardChain::new(vec![primary, fallback]);

        assert!(matches!(
            chain.copy("addr").await,
            Err(ClipboardError::Unavailable)
        ));
        assert!(matches!(
            ClipboardChain::new(Vec::new()).copy("addr").await,
            Err(ClipboardError::Unavailable)
        ));
    }
}
