// SPDX-FileCopyrightText: 2026 Lyra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Agent loop for the Lyra chat assistant.
//!
//! The [`AgentLoop`] is the central coordinator that:
//! - Receives messages from a channel adapter
//! - Classifies each utterance into an intent
//! - Dispatches structured intents to the collection store and queue
//!   controller
//! - Falls through to the LLM provider for free-form conversation
//! - Handles graceful shutdown, stopping live queues on the way out

pub mod memory;
pub mod notify;
pub mod oracle;
pub mod shutdown;

use std::sync::Arc;
use std::time::Duration;

use lyra_collection::{Collection, CollectionStore};
use lyra_config::LyraConfig;
use lyra_core::{
    ChannelAdapter, ChatKind, InboundMessage, LyraError, OutboundMessage, ProviderAdapter,
};
use lyra_intent::{Intent, IntentClassifier, PatternLibrary};
use lyra_queue::{QueueController, QueueStatus, SkipOutcome};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use crate::memory::ConversationMemory;
use crate::notify::ChannelNotifier;

/// Slash commands that bypass intent classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Skip,
    Stop,
    Queue,
    Playlists,
    Memory,
    Clear,
}

fn parse_command(text: &str) -> Option<Command> {
    match text.trim().split_whitespace().next()? {
        "/skip" => Some(Command::Skip),
        "/stop" => Some(Command::Stop),
        "/queue" => Some(Command::Queue),
        "/playlists" => Some(Command::Playlists),
        "/memory" => Some(Command::Memory),
        "/clear" => Some(Command::Clear),
        _ => None,
    }
}

/// The main agent loop coordinating channel, classifier, stores, and provider.
pub struct AgentLoop {
    channel: Arc<dyn ChannelAdapter>,
    provider: Arc<dyn ProviderAdapter>,
    classifier: IntentClassifier,
    collections: Arc<CollectionStore>,
    queues: QueueController,
    memory: ConversationMemory,
    config: LyraConfig,
}

impl AgentLoop {
    /// Creates an agent loop over a connected channel and a provider.
    pub fn new(
        channel: Arc<dyn ChannelAdapter>,
        provider: Arc<dyn ProviderAdapter>,
        config: LyraConfig,
    ) -> Self {
        let classifier = IntentClassifier::new(PatternLibrary::new(config.intent.min_item_len));
        let sink = Arc::new(ChannelNotifier::new(Arc::clone(&channel)));
        let queues = QueueController::new(
            sink,
            Duration::from_secs(config.playback.tick_secs),
            config.playback.upcoming_preview,
        );

        info!(
            agent = config.agent.name.as_str(),
            channel = channel.name(),
            provider = provider.name(),
            "agent loop initialized"
        );

        Self {
            channel,
            provider,
            classifier,
            collections: Arc::new(CollectionStore::new()),
            queues,
            memory: ConversationMemory::default(),
            config,
        }
    }

    /// Runs the main agent loop until the cancellation token is triggered.
    ///
    /// On cancellation (or a closed channel), live queues are stopped
    /// before returning so no scheduler task outlives the loop.
    pub async fn run(&mut self, cancel: CancellationToken) -> Result<(), LyraError> {
        info!("agent loop running");

        loop {
            tokio::select! {
                msg = self.channel.receive() => {
                    match msg {
                        Ok(inbound) => {
                            if let Err(e) = self.handle_inbound(inbound).await {
                                error!(error = %e, "failed to handle inbound message");
                            }
                        }
                        Err(LyraError::ChannelClosed) => {
                            info!("channel closed, stopping agent loop");
                            break;
                        }
                        Err(e) => {
                            error!(error = %e, "channel receive error");
                        }
                    }
                }
                _ = cancel.cancelled() => {
                    info!("shutdown signal received, stopping agent loop");
                    break;
                }
            }
        }

        shutdown::drain_queues(&self.queues).await;
        info!("agent loop stopped");
        Ok(())
    }

    /// Handles one inbound message: gate, classify, dispatch, reply.
    async fn handle_inbound(&mut self, inbound: InboundMessage) -> Result<(), LyraError> {
        debug!(
            sender = %inbound.sender,
            chat = %inbound.chat,
            chat_kind = %inbound.chat_kind,
            "handling inbound message"
        );

        // Group utterances must address the bot; commands always go through.
        let command = parse_command(&inbound.text);
        if inbound.chat_kind == ChatKind::Group && !inbound.addressed && command.is_none() {
            debug!(chat = %inbound.chat, "ignoring unaddressed group message");
            return Ok(());
        }

        let reply = match command {
            Some(command) => self.handle_command(command, &inbound).await?,
            None => self.handle_utterance(&inbound).await?,
        };

        if let Some(text) = reply {
            self.channel
                .send(OutboundMessage::text(inbound.chat.clone(), text.clone()))
                .await?;
            // Only conversation gets remembered; command traffic does not.
            if command.is_none() {
                self.memory.record(&inbound.sender, &inbound.text, &text);
            }
        }
        Ok(())
    }

    /// Queue commands go straight to the controller; recoverable errors
    /// become chat replies, everything else propagates.
    async fn handle_command(
        &mut self,
        command: Command,
        inbound: &InboundMessage,
    ) -> Result<Option<String>, LyraError> {
        let result = match command {
            Command::Skip => self.queues.skip(&inbound.chat).await.map(|outcome| match outcome {
                SkipOutcome::Advanced(item) => format!("skipped! now playing: {item}"),
                SkipOutcome::Completed(summary) => {
                    format!("that was the last one! {summary}")
                }
            }),
            Command::Stop => self
                .queues
                .stop(&inbound.chat)
                .await
                .map(|summary| format!("stopped playback, {summary}")),
            Command::Queue => self.queues.status(&inbound.chat).await.map(render_status),
            Command::Playlists => Ok(render_collections(
                &self.collections.list(&inbound.sender),
                &inbound.sender_name,
            )),
            Command::Memory => Ok(match self.memory.recap(&inbound.sender) {
                Some(recap) => format!(
                    "here's what i remember from our last {} exchange{}, {}:\n{recap}",
                    self.memory.len(&inbound.sender),
                    if self.memory.len(&inbound.sender) == 1 { "" } else { "s" },
                    inbound.sender_name
                ),
                None => format!(
                    "we haven't chatted yet, {}! say something and i'll remember it.",
                    inbound.sender_name
                ),
            }),
            Command::Clear => {
                self.memory.clear(&inbound.sender);
                Ok(format!(
                    "all cleared, {}! we can start fresh. your collections are still saved.",
                    inbound.sender_name
                ))
            }
        };

        match result {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.is_user_recoverable() => Ok(Some(render_recoverable(&e))),
            Err(e) => Err(e),
        }
    }

    async fn handle_utterance(
        &mut self,
        inbound: &InboundMessage,
    ) -> Result<Option<String>, LyraError> {
        let intent = self.classifier.classify(&inbound.utterance());
        match intent {
            Intent::CreateCollection { name, items } => {
                if inbound.chat_kind == ChatKind::Group {
                    return Ok(Some(
                        "let's build collections in a direct chat! message me there and i'll save it."
                            .to_string(),
                    ));
                }
                self.collections.append(&inbound.sender, &name, items.clone());
                Ok(Some(render_created(&name, &items)))
            }
            Intent::PlayRequest { query } => self.handle_play_request(inbound, &query).await,
            Intent::ChoiceRequest { options } => Ok(Some(oracle::choose(&options))),
            Intent::PredictionRequest { subject } => Ok(Some(oracle::predict(&subject))),
            Intent::RatingRequest { subject } => Ok(Some(oracle::rate(&subject))),
            Intent::NoMatch => self.freeform_reply(inbound).await.map(Some),
        }
    }

    async fn handle_play_request(
        &self,
        inbound: &InboundMessage,
        query: &str,
    ) -> Result<Option<String>, LyraError> {
        let Some(collection) = self.collections.find_by_fuzzy_name(&inbound.sender, query) else {
            return Ok(Some(format!(
                "i couldn't find a '{query}' collection for you, {}. create one in our direct chat first!",
                inbound.sender_name
            )));
        };

        let total = collection.items.len();
        match self
            .queues
            .start(
                &inbound.chat,
                &inbound.sender,
                &collection.name,
                collection.items.clone(),
            )
            .await
        {
            Ok(first) => Ok(Some(format!(
                "playing your {} collection! now playing: {first} ({total} items queued)",
                collection.name
            ))),
            Err(e) if e.is_user_recoverable() => Ok(Some(render_recoverable(&e))),
            Err(e) => Err(e),
        }
    }

    /// No structured intent matched: canned phrases first, then the
    /// provider with memory context. Provider failures turn into an
    /// apologetic line rather than killing the conversation.
    async fn freeform_reply(&self, inbound: &InboundMessage) -> Result<String, LyraError> {
        if let Some(special) = oracle::special_response(&inbound.text, &inbound.sender_name) {
            return Ok(special);
        }

        let prompt = self.build_prompt(inbound);
        match self.provider.complete(&prompt).await {
            Ok(reply) if !reply.trim().is_empty() => Ok(reply),
            Ok(_) => Ok(format!(
                "sorry {}, i didn't catch that. try again?",
                inbound.sender_name
            )),
            Err(e) => {
                warn!(error = %e, provider = self.provider.name(), "provider completion failed");
                Ok(format!(
                    "i'm having trouble thinking right now, {}. try again in a moment!",
                    inbound.sender_name
                ))
            }
        }
    }

    fn build_prompt(&self, inbound: &InboundMessage) -> String {
        let mut prompt = format!(
            "You are {}, a friendly chat assistant who loves music and keeping playlists.\n",
            self.config.agent.name
        );
        if let Some(context) = self.memory.context(&inbound.sender, &inbound.sender_name) {
            prompt.push('\n');
            prompt.push_str(&context);
        }
        let collections = self.collections.list(&inbound.sender);
        if !collections.is_empty() {
            let names: Vec<&str> = collections.iter().map(|c| c.name.as_str()).collect();
            prompt.push_str(&format!("\nTheir collections: {}\n", names.join(", ")));
        }
        prompt.push_str(&format!(
            "\nThey are messaging from a {} chat.\n",
            inbound.chat_kind
        ));
        prompt.push_str(&format!(
            "\n{} says: {}\n",
            inbound.sender_name, inbound.text
        ));
        prompt.push_str("Keep the reply to two or three short sentences.");
        prompt
    }
}

fn render_created(name: &str, items: &[String]) -> String {
    let mut out = format!(
        "your {name} collection is ready with {} item{}!\n",
        items.len(),
        if items.len() == 1 { "" } else { "s" }
    );
    for (i, item) in items.iter().take(3).enumerate() {
        out.push_str(&format!("{}. {item}\n", i + 1));
    }
    if items.len() > 3 {
        out.push_str(&format!("... and {} more\n", items.len() - 3));
    }
    out.push_str(&format!("say \"play my {name} playlist\" to start it."));
    out
}

fn render_collections(collections: &[Collection], sender_name: &str) -> String {
    if collections.is_empty() {
        return format!(
            "you don't have any collections yet, {sender_name}! send me something like \
             \"my happy playlist: song one, song two\" and i'll save it."
        );
    }

    let mut out = format!("your collections, {sender_name}:\n");
    for collection in collections {
        out.push_str(&format!(
            "{} ({} item{})\n",
            collection.name,
            collection.items.len(),
            if collection.items.len() == 1 { "" } else { "s" }
        ));
        for item in collection.items.iter().take(3) {
            out.push_str(&format!("  - {item}\n"));
        }
        if collection.items.len() > 3 {
            out.push_str(&format!("  ... and {} more\n", collection.items.len() - 3));
        }
    }
    out.push_str("say \"play my <name> playlist\" to start one.");
    out
}

fn render_status(status: QueueStatus) -> String {
    let mut out = format!(
        "now playing: {} ({}/{}), requested by {}",
        status.current,
        status.position + 1,
        status.total,
        status.owner
    );
    if !status.upcoming.is_empty() {
        out.push_str(&format!("\nup next: {}", status.upcoming.join(", ")));
    }
    out
}

fn render_recoverable(error: &LyraError) -> String {
    match error {
        LyraError::NoActiveQueue { .. } => {
            "nothing is playing here right now. say \"play my <name> playlist\" to start something!"
                .to_string()
        }
        LyraError::EmptyCollection { name } => {
            format!("your '{name}' collection has no items yet, add some first!")
        }
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use lyra_core::{ChatId, HealthStatus, MessageId, UserId};
    use tokio::sync::Mutex;

    use super::*;

    struct TestChannel {
        outbox: Mutex<Vec<OutboundMessage>>,
    }

    impl TestChannel {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                outbox: Mutex::new(Vec::new()),
            })
        }

        async fn sent(&self) -> Vec<String> {
            self.outbox.lock().await.iter().map(|m| m.text.clone()).collect()
        }

        async fn last(&self) -> String {
            self.sent().await.last().cloned().unwrap_or_default()
        }
    }

    #[async_trait]
    impl ChannelAdapter for TestChannel {
        fn name(&self) -> &str {
            "test"
        }

        async fn connect(&mut self) -> Result<(), LyraError> {
            Ok(())
        }

        async fn send(&self, msg: OutboundMessage) -> Result<MessageId, LyraError> {
            let mut outbox = self.outbox.lock().await;
            outbox.push(msg);
            Ok(MessageId(format!("m{}", outbox.len())))
        }

        async fn receive(&self) -> Result<InboundMessage, LyraError> {
            Err(LyraError::ChannelClosed)
        }

        async fn health_check(&self) -> Result<HealthStatus, LyraError> {
            Ok(HealthStatus::Healthy)
        }
    }

    struct StaticProvider {
        reply: Result<String, String>,
        prompts: Mutex<Vec<String>>,
    }

    impl StaticProvider {
        fn replying(text: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(text.to_string()),
                prompts: Mutex::new(Vec::new()),
            })
        }

        fn failing(message: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Err(message.to_string()),
                prompts: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl ProviderAdapter for StaticProvider {
        fn name(&self) -> &str {
            "static"
        }

        async fn complete(&self, prompt: &str) -> Result<String, LyraError> {
            self.prompts.lock().await.push(prompt.to_string());
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(message) => Err(LyraError::Provider {
                    message: message.clone(),
                    source: None,
                }),
            }
        }
    }

    fn direct(text: &str) -> InboundMessage {
        InboundMessage {
            id: "m1".into(),
            text: text.into(),
            sender: UserId("alice".into()),
            sender_name: "Alice".into(),
            chat: ChatId("dm-alice".into()),
            chat_kind: ChatKind::Direct,
            addressed: true,
            timestamp: "2026-01-01T00:00:00Z".into(),
        }
    }

    fn group(text: &str, addressed: bool) -> InboundMessage {
        InboundMessage {
            chat: ChatId("group-1".into()),
            chat_kind: ChatKind::Group,
            addressed,
            ..direct(text)
        }
    }

    fn agent(channel: Arc<TestChannel>, provider: Arc<StaticProvider>) -> AgentLoop {
        AgentLoop::new(channel, provider, LyraConfig::default())
    }

    #[tokio::test]
    async fn create_collection_in_direct_chat_confirms_and_stores() {
        let channel = TestChannel::new();
        let mut agent = agent(Arc::clone(&channel), StaticProvider::replying("hi"));

        agent
            .handle_inbound(direct("my chill playlist: song one, song two"))
            .await
            .unwrap();

        let reply = channel.last().await;
        assert!(reply.contains("chill"), "got: {reply}");
        assert!(reply.contains("2 items"), "got: {reply}");

        let stored = agent
            .collections
            .find_by_fuzzy_name(&UserId("alice".into()), "chill")
            .unwrap();
        assert_eq!(stored.items, vec!["song one", "song two"]);
    }

    #[tokio::test]
    async fn create_collection_in_group_is_redirected() {
        let channel = TestChannel::new();
        let mut agent = agent(Arc::clone(&channel), StaticProvider::replying("hi"));

        agent
            .handle_inbound(group("my chill playlist: song one, song two", true))
            .await
            .unwrap();

        assert!(channel.last().await.contains("direct chat"));
        assert!(agent
            .collections
            .find_by_fuzzy_name(&UserId("alice".into()), "chill")
            .is_none());
    }

    #[tokio::test]
    async fn play_request_starts_queue_and_announces_first_item() {
        let channel = TestChannel::new();
        let mut agent = agent(Arc::clone(&channel), StaticProvider::replying("hi"));

        agent
            .handle_inbound(direct("my chill playlist: song one, song two"))
            .await
            .unwrap();
        agent
            .handle_inbound(group("play my chill playlist", true))
            .await
            .unwrap();

        let reply = channel.last().await;
        assert!(reply.contains("now playing: song one"), "got: {reply}");
        assert!(agent.queues.has_queue(&ChatId("group-1".into())));
    }

    #[tokio::test]
    async fn play_request_for_unknown_collection_misses_kindly() {
        let channel = TestChannel::new();
        let mut agent = agent(Arc::clone(&channel), StaticProvider::replying("hi"));

        agent
            .handle_inbound(group("play my workout playlist", true))
            .await
            .unwrap();

        let reply = channel.last().await;
        assert!(reply.contains("couldn't find"), "got: {reply}");
        assert!(reply.contains("workout"), "got: {reply}");
        assert!(!agent.queues.has_queue(&ChatId("group-1".into())));
    }

    #[tokio::test]
    async fn skip_without_queue_is_a_friendly_reply_not_an_error() {
        let channel = TestChannel::new();
        let mut agent = agent(Arc::clone(&channel), StaticProvider::replying("hi"));

        agent.handle_inbound(group("/skip", false)).await.unwrap();

        assert!(channel.last().await.contains("nothing is playing"));
    }

    #[tokio::test]
    async fn queue_command_reports_status() {
        let channel = TestChannel::new();
        let mut agent = agent(Arc::clone(&channel), StaticProvider::replying("hi"));

        agent
            .handle_inbound(direct("my mix playlist: alpha, beta, gamma, delta"))
            .await
            .unwrap();
        agent
            .handle_inbound(group("play my mix playlist", true))
            .await
            .unwrap();
        agent.handle_inbound(group("/queue", false)).await.unwrap();

        let reply = channel.last().await;
        assert!(reply.contains("now playing: alpha (1/4)"), "got: {reply}");
        assert!(reply.contains("up next: beta, gamma, delta"), "got: {reply}");
    }

    #[tokio::test]
    async fn skip_command_advances_live_queue() {
        let channel = TestChannel::new();
        let mut agent = agent(Arc::clone(&channel), StaticProvider::replying("hi"));

        agent
            .handle_inbound(direct("my mix playlist: alpha, beta"))
            .await
            .unwrap();
        agent
            .handle_inbound(group("play my mix playlist", true))
            .await
            .unwrap();
        agent.handle_inbound(group("/skip", false)).await.unwrap();

        assert!(channel.last().await.contains("now playing: beta"));
    }

    #[tokio::test]
    async fn choice_request_names_an_option() {
        let channel = TestChannel::new();
        let mut agent = agent(Arc::clone(&channel), StaticProvider::replying("hi"));

        agent
            .handle_inbound(group("should i watch Movie A or Movie B?", true))
            .await
            .unwrap();

        let reply = channel.last().await;
        assert!(
            reply.contains("Movie A") || reply.contains("Movie B"),
            "got: {reply}"
        );
    }

    #[tokio::test]
    async fn no_match_falls_through_to_provider_with_memory_context() {
        let channel = TestChannel::new();
        let provider = StaticProvider::replying("doing great, thanks!");
        let mut agent = agent(Arc::clone(&channel), Arc::clone(&provider));

        agent.handle_inbound(direct("hello there")).await.unwrap();
        agent.handle_inbound(direct("how is it going")).await.unwrap();

        assert_eq!(channel.last().await, "doing great, thanks!");

        let prompts = provider.prompts.lock().await;
        let last_prompt = prompts.last().unwrap();
        assert!(last_prompt.contains("how is it going"), "got: {last_prompt}");
        assert!(
            last_prompt.contains("Recent conversation with Alice"),
            "second prompt should carry memory: {last_prompt}"
        );
    }

    #[tokio::test]
    async fn provider_failure_becomes_an_apology() {
        let channel = TestChannel::new();
        let mut agent = agent(Arc::clone(&channel), StaticProvider::failing("api down"));

        agent.handle_inbound(direct("tell me something")).await.unwrap();

        let reply = channel.last().await;
        assert!(reply.contains("trouble thinking"), "got: {reply}");
    }

    #[tokio::test]
    async fn canned_phrases_never_reach_the_provider() {
        let channel = TestChannel::new();
        let provider = StaticProvider::replying("should not be used");
        let mut agent = agent(Arc::clone(&channel), Arc::clone(&provider));

        agent.handle_inbound(direct("good night!")).await.unwrap();

        assert!(channel.last().await.contains("Alice"));
        assert!(provider.prompts.lock().await.is_empty());
    }

    #[tokio::test]
    async fn unaddressed_group_chatter_is_ignored() {
        let channel = TestChannel::new();
        let provider = StaticProvider::replying("hi");
        let mut agent = agent(Arc::clone(&channel), Arc::clone(&provider));

        agent
            .handle_inbound(group("just chatting with friends", false))
            .await
            .unwrap();

        assert!(channel.sent().await.is_empty());
        assert!(provider.prompts.lock().await.is_empty());
    }

    #[tokio::test]
    async fn playlists_command_lists_collections_with_previews() {
        let channel = TestChannel::new();
        let mut agent = agent(Arc::clone(&channel), StaticProvider::replying("hi"));

        agent
            .handle_inbound(direct("my chill playlist: one, two, three, four, five"))
            .await
            .unwrap();
        agent
            .handle_inbound(direct("my gym playlist: pump it"))
            .await
            .unwrap();
        agent.handle_inbound(direct("/playlists")).await.unwrap();

        let reply = channel.last().await;
        assert!(reply.contains("chill (5 items)"), "got: {reply}");
        assert!(reply.contains("gym (1 item)"), "got: {reply}");
        assert!(reply.contains("- one"), "got: {reply}");
        assert!(reply.contains("... and 2 more"), "got: {reply}");
        assert!(!reply.contains("- four"), "got: {reply}");
    }

    #[tokio::test]
    async fn playlists_command_without_collections_explains_how_to_create() {
        let channel = TestChannel::new();
        let mut agent = agent(Arc::clone(&channel), StaticProvider::replying("hi"));

        agent.handle_inbound(direct("/playlists")).await.unwrap();

        let reply = channel.last().await;
        assert!(reply.contains("don't have any collections"), "got: {reply}");
        assert!(reply.contains("my happy playlist"), "got: {reply}");
    }

    #[tokio::test]
    async fn memory_command_recaps_recent_exchanges() {
        let channel = TestChannel::new();
        let mut agent = agent(Arc::clone(&channel), StaticProvider::replying("nice to meet you"));

        agent.handle_inbound(direct("hello there")).await.unwrap();
        agent.handle_inbound(direct("/memory")).await.unwrap();

        let reply = channel.last().await;
        assert!(reply.contains("you: hello there"), "got: {reply}");
        assert!(reply.contains("me: nice to meet you"), "got: {reply}");
    }

    #[tokio::test]
    async fn memory_command_without_history_invites_chatting() {
        let channel = TestChannel::new();
        let mut agent = agent(Arc::clone(&channel), StaticProvider::replying("hi"));

        agent.handle_inbound(direct("/memory")).await.unwrap();

        assert!(channel.last().await.contains("haven't chatted yet"));
    }

    #[tokio::test]
    async fn clear_command_forgets_history_but_keeps_collections() {
        let channel = TestChannel::new();
        let mut agent = agent(Arc::clone(&channel), StaticProvider::replying("hi"));

        agent.handle_inbound(direct("hello there")).await.unwrap();
        agent
            .handle_inbound(direct("my chill playlist: song one"))
            .await
            .unwrap();
        agent.handle_inbound(direct("/clear")).await.unwrap();

        assert!(channel.last().await.contains("all cleared"));
        assert_eq!(agent.memory.len(&UserId("alice".into())), 0);
        assert!(agent
            .collections
            .find_by_fuzzy_name(&UserId("alice".into()), "chill")
            .is_some());
    }

    #[tokio::test]
    async fn command_traffic_stays_out_of_memory() {
        let channel = TestChannel::new();
        let mut agent = agent(Arc::clone(&channel), StaticProvider::replying("hi"));

        agent.handle_inbound(direct("/playlists")).await.unwrap();
        agent.handle_inbound(direct("/memory")).await.unwrap();

        assert_eq!(agent.memory.len(&UserId("alice".into())), 0);
    }

    #[tokio::test]
    async fn run_exits_cleanly_when_the_channel_closes() {
        let channel = TestChannel::new();
        let mut agent = agent(Arc::clone(&channel), StaticProvider::replying("hi"));

        // TestChannel::receive always reports a closed channel, so run
        // must return without waiting on the cancellation token.
        agent.run(CancellationToken::new()).await.unwrap();
    }

    #[test]
    fn command_parsing_recognizes_known_commands_only() {
        assert_eq!(parse_command("/skip"), Some(Command::Skip));
        assert_eq!(parse_command("  /stop  "), Some(Command::Stop));
        assert_eq!(parse_command("/queue please"), Some(Command::Queue));
        assert_eq!(parse_command("/playlists"), Some(Command::Playlists));
        assert_eq!(parse_command("/memory"), Some(Command::Memory));
        assert_eq!(parse_command("/clear"), Some(Command::Clear));
        assert_eq!(parse_command("/unknown"), None);
        assert_eq!(parse_command("skip"), None);
    }
}
