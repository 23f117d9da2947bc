//! Event Publishing Adapters

mod channel;

pub use channel::ChannelEventPublisher;
