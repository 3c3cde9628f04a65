use lyrics::{GeniusClient, SongSummary};
use songmatch_config::Config;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

const PROMPT: &str = "Enter lyrics to search for: ";

/// Run a one-off lyrics search and print the best match
///
/// With no words on the command line, one line is read from stdin.
///
/// # Errors
///
/// Returns an error when no Genius token is configured, the HTTP client
/// cannot be built, stdin cannot be read, or the search fails
pub async fn run(config: &Config, words: &[String]) -> anyhow::Result<()> {
    let client = songmatch_core::http_client(config.server.upstream_timeout_duration())?;
    let genius = GeniusClient::new(&config.genius, client);

    if !genius.has_access_token() {
        anyhow::bail!("Genius access token is not configured (set GENIUS_ACCESS_TOKEN)");
    }

    let lyrics = if words.is_empty() {
        prompt_lyrics(BufReader::new(tokio::io::stdin()), tokio::io::stdout()).await?
    } else {
        words.join(" ")
    };

    let song = genius.search(&lyrics).await?;

    println!("{}", render(&SongSummary::from_result(&song)));

    Ok(())
}

/// Write the prompt and read a single line of lyrics
async fn prompt_lyrics<R, W>(mut input: R, mut output: W) -> std::io::Result<String>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    output.write_all(PROMPT.as_bytes()).await?;
    output.flush().await?;

    let mut line = String::new();
    input.read_line(&mut line).await?;

    Ok(line.trim_end_matches(['\r', '\n']).to_owned())
}

fn render(summary: &SongSummary<'_>) -> String {
    format!(
        "Found song: {} by {}\nGenius URL: {}",
        summary.title, summary.artist, summary.url
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_two_lines() {
        let summary = SongSummary {
            title: "Bohemian Rhapsody",
            artist: "Queen",
            url: "https://genius.com/Queen-bohemian-rhapsody-lyrics",
        };

        assert_eq!(
            render(&summary),
            "Found song: Bohemian Rhapsody by Queen\nGenius URL: https://genius.com/Queen-bohemian-rhapsody-lyrics"
        );
    }

    #[tokio::test]
    async fn prompts_and_reads_one_line() {
        let mut output = Vec::new();
        let input: &[u8] = b"is this the real life\r\nis this just fantasy\n";

        let lyrics = prompt_lyrics(input, &mut output).await.unwrap();

        assert_eq!(lyrics, "is this the real life");
        assert_eq!(output, PROMPT.as_bytes());
    }

    #[tokio::test]
    async fn closed_stdin_reads_as_empty() {
        let input: &[u8] = b"";
        let lyrics = prompt_lyrics(input, Vec::new()).await.unwrap();
        assert!(lyrics.is_empty());
    }

    #[tokio::test]
    async fn missing_token_fails_before_any_request() {
        let err = run(&Config::default(), &["hello".to_owned()]).await.unwrap_err();
        assert!(err.to_string().contains("Genius access token"));
    }
}
