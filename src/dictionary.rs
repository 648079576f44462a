//! The fixed zlib dictionaries used to prime the header block compressor.
//!
//! SPDY primes its deflate/inflate streams with a canned dictionary of
//! common HTTP header names, values, and status lines so that even the
//! first, otherwise-tiny header block compresses well. SPDY/2 and SPDY/3
//! publish *distinct* byte tables: SPDY/2's is a flat concatenation of
//! common tokens, while SPDY/3's is a sequence of 4-byte-length-prefixed
//! strings (matching SPDY/3's own 32-bit name/value length prefixes)
//! followed by the same tail of status lines, dates, and content types.
//! Priming the wrong direction's stream with the wrong table produces
//! compressed output a conforming peer of that version cannot decode.

/// The SPDY/2 header-compression dictionary (SPDY/2 draft 2).
pub const SPDY_V2_DICTIONARY: &[u8] = b"\
optionsgetheadpostputdeletetraceacceptaccept-charsetaccept-encodingaccept-\
languageauthorizationexpectfromhostif-modified-sinceif-matchif-none-matchi\
f-rangeif-unmodifiedsincemax-forwardsproxy-authorizationrangerefererteuser\
-agent10010120020120220320420520630030130230330430530630740040140240340440\
5406407408409410411412413414415416417500501502503504505accept-rangesageeta\
glocationproxy-authenticatepublicretry-afterservervarywarningwww-authentic\
ateallowcontent-basecontent-encodingcache-controlconnectiondatetrailertran\
sfer-encodingupgradeviawarningcontent-languagecontent-lengthcontent-locati\
oncontent-md5content-rangecontent-typeetagexpireslast-modifiedset-cookieMo\
ndayTuesdayWednesdayThursdayFridaySaturdaySundayJanFebMarAprMayJunJulAugSe\
pOctNovDecchunkedtext/htmlimage/pngimage/jpgimage/gifapplication/xmlapplic\
ation/xhtmltext/plainpublicmax-agecharset=iso-8859-1utf-8gzipdeflateHTTP/1\
.1statusversionurl\0";

/// The SPDY/3 header-compression dictionary (SPDY/3 draft 3). Each header
/// name below is prefixed with its 4-byte big-endian length, matching the
/// 32-bit length prefixes SPDY/3's own header block format uses, followed
/// by a flat tail of status lines, dates, and content-type tokens shared
/// with the SPDY/2 table.
pub const SPDY_V3_DICTIONARY: &[u8] = b"\
\x00\x00\x00\x07options\x00\x00\x00\x04head\x00\x00\x00\x04post\x00\x00\
\x00\x03put\x00\x00\x00\x06delete\x00\x00\x00\x05trace\x00\x00\x00\x06acce\
pt\x00\x00\x00\x0eaccept-charset\x00\x00\x00\x0faccept-encoding\x00\x00\
\x00\x0faccept-language\x00\x00\x00\x0daccept-ranges\x00\x00\x00\x03age\
\x00\x00\x00\x05allow\x00\x00\x00\x0dauthorization\x00\x00\x00\x0dcache-co\
ntrol\x00\x00\x00\x0aconnection\x00\x00\x00\x0ccontent-base\x00\x00\x00\
\x10content-encoding\x00\x00\x00\x10content-language\x00\x00\x00\x0econten\
t-length\x00\x00\x00\x10content-location\x00\x00\x00\x0bcontent-md5\x00\
\x00\x00\x0dcontent-range\x00\x00\x00\x0ccontent-type\x00\x00\x00\x04date\
\x00\x00\x00\x04etag\x00\x00\x00\x06expect\x00\x00\x00\x07expires\x00\x00\
\x00\x04from\x00\x00\x00\x04host\x00\x00\x00\x08if-match\x00\x00\x00\x11if\
-modified-since\x00\x00\x00\x0dif-none-match\x00\x00\x00\x08if-range\x00\
\x00\x00\x13if-unmodified-since\x00\x00\x00\x0dlast-modified\x00\x00\x00\
\x08location\x00\x00\x00\x0cmax-forwards\x00\x00\x00\x06pragma\x00\x00\x00\
\x12proxy-authenticate\x00\x00\x00\x13proxy-authorization\x00\x00\x00\x05r\
ange\x00\x00\x00\x07referer\x00\x00\x00\x0bretry-after\x00\x00\x00\x06serv\
er\x00\x00\x00\x02te\x00\x00\x00\x07trailer\x00\x00\x00\x11transfer-encodi\
ng\x00\x00\x00\x07upgrade\x00\x00\x00\x0auser-agent\x00\x00\x00\x04vary\
\x00\x00\x00\x03via\x00\x00\x00\x07warning\x00\x00\x00\x10www-authenticate\
\x00\x00\x00\x06method\x00\x00\x00\x03get\x00\x00\x00\x06status\x00\x00\
\x00\x06200 OK\x00\x00\x00\x07version\x00\x00\x00\x08HTTP/1.1\x00\x00\x00\
\x03url\x00\x00\x00\x06public\x00\x00\x00\x0aset-cookie\x00\x00\x00\x0akee\
p-alive\x00\x00\x00\x06origin100101201202205206300301302303304305306307402\
405406407408409410411412413414415416417502504505203 Non-Authoritative Info\
rmation204 No Content301 Moved Permanently400 Bad Request401 Unauthorized4\
03 Forbidden404 Not Found500 Internal Server Error501 Not Implemented503 S\
ervice UnavailableJan Feb Mar Apr May Jun Jul Aug Sept Oct Nov Dec 00:00:0\
0Mon, Tue, Wed, Thu, Fri, Sat, Sun, GMTchunkedtext/htmlimage/pngimage/jpgi\
mage/gifapplication/xmlapplication/xhtml+xmltext/plainpublic max-age chars\
et=iso-8859-1utf-8gzipdeflateHTTP/1.1statusversionurl\x00";

/// Returns the preset dictionary bytes for a given SPDY version. `version`
/// must be `2` or `3`; callers construct a `HeaderCompressor` only after
/// the session's version has already been validated.
pub fn dictionary_for_version(version: u8) -> &'static [u8] {
    match version {
        2 => SPDY_V2_DICTIONARY,
        _ => SPDY_V3_DICTIONARY,
    }
}
