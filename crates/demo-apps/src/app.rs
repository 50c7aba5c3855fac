//! Line-oriented app loop
//!
//! A store subscriber prints `State: <json>` and the rendered view after
//! every reduced action. Actions queued by background tasks are applied while
//! the loop waits for input, so a finished fetch shows up on its own.

use crate::views::{Command, View};
use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use unistore::{Action, Reducer, Store};

enum Event {
    Line(Option<String>),
    Applied,
}

fn print_state<V: View>(out: &mut impl Write, view: &V, state: &V::State) -> std::io::Result<()> {
    match view.snapshot(state) {
        Ok(json) => writeln!(out, "State: {}", json)?,
        Err(e) => log::error!("Failed to serialize state: {}", e),
    }
    writeln!(out, "{}", view.render(state))
}

/// Run `view` on `store`, one command per line of `input`, until quit or end
/// of input
pub async fn run_app<V, R, W>(
    mut store: Store<V::State, V::Action>,
    view: V,
    input: R,
    output: W,
) -> anyhow::Result<()>
where
    V: View + Copy + 'static,
    V::State: Reducer<V::Action> + Default + 'static,
    V::Action: Action,
    R: AsyncBufRead + Unpin,
    W: Write + 'static,
{
    let output = Rc::new(RefCell::new(output));

    let sink = output.clone();
    let _printer = store.subscribe(move |state, _| {
        if let Err(e) = print_state(&mut *sink.borrow_mut(), &view, state) {
            log::error!("Failed to print state: {}", e);
        }
    });

    writeln!(output.borrow_mut(), "{}", view.render(store.state()))?;
    writeln!(output.borrow_mut(), "Commands: {}", view.help())?;

    for action in view.startup_actions() {
        store.dispatch(action);
    }

    let mut lines = input.lines();
    loop {
        let event = tokio::select! {
            line = lines.next_line() => Event::Line(line?),
            _ = store.process_next() => Event::Applied,
        };

        let line = match event {
            Event::Applied => continue,
            Event::Line(None) => break,
            Event::Line(Some(line)) => line,
        };

        match view.parse(&line, store.state()) {
            Ok(Some(Command::Dispatch(action))) => store.dispatch(action),
            Ok(Some(Command::Show)) => {
                writeln!(output.borrow_mut(), "{}", view.render(store.state()))?
            }
            Ok(Some(Command::Quit)) => break,
            Ok(None) => {}
            Err(e) => {
                log::debug!("Rejected input {:?}: {}", line, e);
                writeln!(output.borrow_mut(), "{}", e)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middleware::MatchFetchMiddleware;
    use crate::state::{CounterState, MatchBrowserState};
    use crate::views::{CounterView, MatchView};
    use async_trait::async_trait;
    use match_client::{FetchError, FootballMatch, MatchClient};
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::io::BufReader;

    /// Output buffer the test can read while the app still owns a handle
    #[derive(Clone, Default)]
    struct SharedOutput(Rc<RefCell<Vec<u8>>>);

    impl SharedOutput {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.borrow()).into_owned()
        }
    }

    impl Write for SharedOutput {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    struct UnavailableClient;

    #[async_trait]
    impl MatchClient for UnavailableClient {
        async fn fetch_matches(&self, _page: u32) -> Result<Vec<FootballMatch>, FetchError> {
            Err(FetchError::Status(503))
        }
    }

    #[tokio::test]
    async fn test_each_dispatch_prints_state_and_view() {
        let out = SharedOutput::default();
        let input: &[u8] = b"increment\nincrement\nbogus\nquit\nincrement\n";

        run_app(Store::new(CounterState::default()), CounterView, input, out.clone())
            .await
            .unwrap();

        let text = out.text();
        assert!(text.starts_with("Counter: 0\nCommands: "));
        assert!(text.contains("State: {\"count\":2}\nCounter: 2"));
        assert!(text.contains("Unknown command: bogus"));
        assert!(!text.contains("Counter: 3"));
    }

    #[tokio::test]
    async fn test_failed_fetch_is_shown_without_further_input() {
        let mut store = Store::new(MatchBrowserState::default());
        store.add_middleware(Box::new(MatchFetchMiddleware::new(
            Arc::new(UnavailableClient),
            2,
        )));

        let out = SharedOutput::default();
        let watched = out.clone();
        let (writer, reader) = tokio::io::duplex(64);

        // Keep stdin open until the failure has been rendered
        let close_input = async move {
            while !watched.text().contains("Error fetching data.") {
                tokio::task::yield_now().await;
            }
            drop(writer);
        };

        let (result, ()) = tokio::time::timeout(Duration::from_secs(5), async {
            tokio::join!(
                run_app(store, MatchView, BufReader::new(reader), out.clone()),
                close_input
            )
        })
        .await
        .expect("app loop did not finish");
        result.unwrap();

        let text = out.text();
        let loading = text.find("Loading...").unwrap();
        let error = text.find("Error fetching data.").unwrap();
        assert!(loading < error);
    }
}
