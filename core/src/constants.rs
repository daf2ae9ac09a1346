/// The 256 bytewords, four letters each, concatenated in byte-value order.
/// Word `i` is `BYTEWORDS[i * 4..i * 4 + 4]`.
pub const BYTEWORDS: &str = concat!(
    "ableacidalsoapexaquaarchatomauntawayaxisbackbaldbarnbeltbetabias",
    "bluebodybragbrewbulbbuzzcalmcashcatschefcityclawcodecolacookcost",
    "cruxcurlcuspcyandarkdatadaysdelidicedietdoordowndrawdropdrumdull",
    "dutyeacheasyechoedgeepicevenexamexiteyesfactfairfernfigsfilmfish",
    "fizzflapflewfluxfoxyfreefrogfuelfundgalagamegeargemsgiftgirlglow",
    "goodgraygrimgurugushgyrohalfhanghardhawkheathelphighhillholyhope",
    "hornhutsicedideaidleinchinkyintoirisironitemjadejazzjoinjoltjowl",
    "judojugsjumpjunkjurykeepkenokeptkeyskickkilnkingkitekiwiknoblamb",
    "lavalazyleaflegsliarlimplionlistlogoloudloveluaulucklungmainmany",
    "mathmazememomenumeowmildmintmissmonknailnavyneednewsnextnoonnote",
    "numbobeyoboeomitonyxopenovalowlspaidpartpeckplaypluspoempoolpose",
    "puffpumapurrquadquizraceramprealredorichroadrockroofrubyruinruns",
    "rustsafesagascarsetssilkskewslotsoapsolosongstubsurfswantacotask",
    "taxitenttiedtimetinytoiltombtoystriptunatwinuglyundouniturgeuser",
    "vastveryvetovialvibeviewvisavoidvowswallwandwarmwaspwavewaxywebs",
    "whatwhenwhizwolfworkyankyawnyellyogayurtzapszerozestzinczonezoom",
);

/// Letters per full word.
pub const WORD_LEN: usize = 4;
/// Letters per word in the minimal form (first + last).
pub const MINIMAL_WORD_LEN: usize = 2;
/// Size of the alphabet the words are drawn from (`a`..=`z`).
pub const ALPHABET_LEN: usize = 26;

/// Big-endian CRC-32 trailer length.
pub const CHECKSUM_LEN: usize = 4;
/// Smallest decodable payload: one body byte plus the checksum.
pub const MIN_PAYLOAD_LEN: usize = CHECKSUM_LEN + 1;

/// Separator between words in the standard style.
pub const STANDARD_SEPARATOR: &str = " ";
/// Separator between words in the URI style.
pub const URI_SEPARATOR: &str = "-";

/// Default cap on inflated container size (16 MiB).
pub const DEFAULT_MAX_INFLATED_SIZE: usize = 16 * 1024 * 1024;
/// Default compression level used when wrapping (balanced).
pub const DEFAULT_COMPRESSION_LEVEL: u32 = 6;

/// Positional layout of the record tree.
pub mod positions {
    pub const ROOT_VERSION: usize = 0;
    pub const ROOT_ACCOUNTS: usize = 1;
    pub const ROOT_LEN: usize = 2;

    pub const ACCOUNT_ID: usize = 0;
    pub const ACCOUNT_INDEX: usize = 1;
    pub const ACCOUNT_TYPE: usize = 2;
    pub const ACCOUNT_BLOCK: usize = 3;
    pub const ACCOUNT_WALLET: usize = 4;
    pub const ACCOUNT_LEN: usize = 5;

    pub const WALLET_DERIVATION_PATH: usize = 0;
    pub const WALLET_CHAIN_CODE: usize = 1;
    pub const WALLET_NAME: usize = 2;
    pub const WALLET_FLAG_A: usize = 3;
    pub const WALLET_FLAG_B: usize = 4;
    pub const WALLET_OPAQUE: usize = 5;
    pub const WALLET_XPUB: usize = 6;
    pub const WALLET_LEN: usize = 7;
}
