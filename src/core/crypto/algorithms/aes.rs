/*!
AES-128 in cipher-block-chaining mode.

A fresh key and initialization vector are drawn per invocation. Each
padded plaintext block is combined with the previous ciphertext block
(the IV for the first) and pushed through the full round structure:
initial key mixing, nine rounds of byte substitution, row rotation,
column diffusion and key mixing, and a final round that skips the
column diffusion. The raw key and IV are returned as generated
material.
*/

use rand::{thread_rng, RngCore};

use crate::core::crypto::traits::cipher::Cipher;
use crate::core::crypto::types::algorithms::CipherAlgorithm;
use crate::core::crypto::types::constants::block::{
    BLOCK_SIZE, IV_SIZE, KEY_SIZE, RCON, ROUNDS, SCHEDULE_WORDS, S_BOX,
};
use crate::core::crypto::types::material::KeyMaterial;
use crate::core::crypto::types::request::{CipherOutput, CipherRequest};
use crate::core::error::CipherError;
use crate::core::math::gf_mul;

/// AES-128-CBC cipher implementation
pub struct Aes128CbcCipher;

type Block = [u8; BLOCK_SIZE];

/// 4x4 state matrix, indexed `state[row][column]`; block byte `i` maps
/// to row `i % 4`, column `i / 4`
type State = [[u8; 4]; 4];

type Word = [u8; 4];

fn random_bytes<const N: usize>() -> [u8; N] {
    let mut bytes = [0u8; N];
    thread_rng().fill_bytes(&mut bytes);
    bytes
}

/// Byte-value padding to a whole number of blocks. Each pad byte holds
/// the pad length; an already aligned message gains a full extra block.
pub(crate) fn pad(message: &[u8]) -> Vec<u8> {
    let pad_len = BLOCK_SIZE - message.len() % BLOCK_SIZE;
    let mut padded = message.to_vec();
    padded.extend(std::iter::repeat(pad_len as u8).take(pad_len));
    padded
}

fn sub_word(word: Word) -> Word {
    [
        S_BOX[word[0] as usize],
        S_BOX[word[1] as usize],
        S_BOX[word[2] as usize],
        S_BOX[word[3] as usize],
    ]
}

fn rot_word(word: Word) -> Word {
    [word[1], word[2], word[3], word[0]]
}

/// Expand the 16-byte key into 44 four-byte words, four words per
/// round key.
pub(crate) fn key_schedule(key: &[u8; KEY_SIZE]) -> [Word; SCHEDULE_WORDS] {
    let mut words = [[0u8; 4]; SCHEDULE_WORDS];
    for i in 0..4 {
        words[i] = [key[4 * i], key[4 * i + 1], key[4 * i + 2], key[4 * i + 3]];
    }

    for i in 4..SCHEDULE_WORDS {
        let mut temp = words[i - 1];
        if i % 4 == 0 {
            temp = sub_word(rot_word(temp));
            temp[0] ^= RCON[i / 4 - 1];
        }
        for b in 0..4 {
            words[i][b] = words[i - 4][b] ^ temp[b];
        }
    }
    words
}

fn to_state(block: &Block) -> State {
    let mut state = [[0u8; 4]; 4];
    for (i, byte) in block.iter().enumerate() {
        state[i % 4][i / 4] = *byte;
    }
    state
}

fn from_state(state: &State) -> Block {
    let mut block = [0u8; BLOCK_SIZE];
    for (i, byte) in block.iter_mut().enumerate() {
        *byte = state[i % 4][i / 4];
    }
    block
}

fn sub_bytes(state: &mut State) {
    for row in state.iter_mut() {
        for byte in row.iter_mut() {
            *byte = S_BOX[*byte as usize];
        }
    }
}

/// Rotate row r left by r positions.
fn shift_rows(state: &mut State) {
    for r in 1..4 {
        state[r].rotate_left(r);
    }
}

/// Diffuse each column through the fixed GF(2^8) matrix.
fn mix_columns(state: &mut State) {
    for col in 0..4 {
        let a = state[0][col];
        let b = state[1][col];
        let c = state[2][col];
        let d = state[3][col];
        state[0][col] = gf_mul(a, 2) ^ gf_mul(b, 3) ^ c ^ d;
        state[1][col] = a ^ gf_mul(b, 2) ^ gf_mul(c, 3) ^ d;
        state[2][col] = a ^ b ^ gf_mul(c, 2) ^ gf_mul(d, 3);
        state[3][col] = gf_mul(a, 3) ^ b ^ c ^ gf_mul(d, 2);
    }
}

/// XOR four schedule words into the state, one word per column.
fn add_round_key(state: &mut State, round_key: &[Word]) {
    for col in 0..4 {
        for row in 0..4 {
            state[row][col] ^= round_key[col][row];
        }
    }
}

/// Encrypt one block through the full round structure.
pub(crate) fn encrypt_block(block: &Block, schedule: &[Word; SCHEDULE_WORDS]) -> Block {
    let mut state = to_state(block);

    add_round_key(&mut state, &schedule[0..4]);
    for round in 1..ROUNDS {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, &schedule[round * 4..(round + 1) * 4]);
    }
    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, &schedule[ROUNDS * 4..(ROUNDS + 1) * 4]);

    from_state(&state)
}

fn xor_blocks(a: &Block, b: &Block) -> Block {
    let mut out = [0u8; BLOCK_SIZE];
    for i in 0..BLOCK_SIZE {
        out[i] = a[i] ^ b[i];
    }
    out
}

/// CBC chaining driver over the padded plaintext.
pub(crate) fn encrypt_cbc(plaintext: &[u8], key: &[u8; KEY_SIZE], iv: &[u8; IV_SIZE]) -> Vec<u8> {
    let schedule = key_schedule(key);
    let mut ciphertext = Vec::with_capacity(plaintext.len());
    let mut previous: Block = *iv;

    for chunk in plaintext.chunks_exact(BLOCK_SIZE) {
        let mut block = [0u8; BLOCK_SIZE];
        block.copy_from_slice(chunk);
        let encrypted = encrypt_block(&xor_blocks(&block, &previous), &schedule);
        ciphertext.extend_from_slice(&encrypted);
        previous = encrypted;
    }
    ciphertext
}

impl Cipher for Aes128CbcCipher {
    fn encrypt(&self, request: &CipherRequest) -> Result<CipherOutput, CipherError> {
        let key: [u8; KEY_SIZE] = random_bytes();
        let iv: [u8; IV_SIZE] = random_bytes();

        let padded = pad(request.message.as_bytes());
        let ciphertext = encrypt_cbc(&padded, &key, &iv);

        Ok(CipherOutput {
            ciphertext: hex::encode(ciphertext),
            material: Some(KeyMaterial::Symmetric {
                key: key.to_vec(),
                iv: iv.to_vec(),
            }),
        })
    }

    fn algorithm(&self) -> CipherAlgorithm {
        CipherAlgorithm::Aes128Cbc
    }
}
